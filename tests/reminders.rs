mod helpers;

use chrono::{prelude::*, Duration};
use health_reminders_api::{book_appointment, deliver_notifications, remind_about_health_alert};
use health_reminders_domain::{
    AppointmentBooking, AuthorizationStatus, NotificationTrigger, Reminder, ReminderKind, ID,
};
use health_reminders_infra::{Config, INotificationCenter, StaticTimeSys};
use helpers::setup::{default_config, setup_app};
use helpers::utils::daily_trigger;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 5, 8, 20, 0).unwrap()
}

#[tokio::test]
async fn medicine_reminder_end_to_end() {
    let app = setup_app(now(), default_config());
    app.permission_gate.request_permission().await.unwrap();

    let time = now() + Duration::hours(1);
    let reminder = Reminder::medicine("Aspirin", time);
    app.store.add(reminder.clone()).await;

    let listed = app.store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, reminder.id);

    let submissions = app.center.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].identifier, reminder.id.as_string());
    assert_eq!(submissions[0].content.title, "Medicine Reminder");
    assert!(submissions[0].content.body.contains("Aspirin"));
    assert_eq!(
        submissions[0].trigger,
        daily_trigger(time.hour(), time.minute())
    );
}

#[tokio::test]
async fn repeating_trigger_drops_the_date() {
    let app = setup_app(now(), default_config());
    let reminder = Reminder::medicine(
        "Aspirin",
        Utc.with_ymd_and_hms(2023, 10, 5, 9, 0, 0).unwrap(),
    );

    let request = app.scheduler.schedule(&reminder).await.unwrap();

    assert_eq!(request.trigger, daily_trigger(9, 0));
}

#[tokio::test]
async fn scheduling_same_id_twice_keeps_second_request() {
    let app = setup_app(now(), default_config());
    let mut reminder = Reminder::medicine("Aspirin", now() + Duration::hours(1));

    app.scheduler.schedule(&reminder).await.unwrap();
    reminder.body_text = "Take it with water".into();
    app.scheduler.schedule(&reminder).await.unwrap();

    let pending = app.center.pending_requests().await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].content.body, "Take it with water");
}

#[tokio::test]
async fn removing_unknown_reminder_changes_nothing() {
    let app = setup_app(now(), default_config());
    app.store
        .add(Reminder::medicine("Aspirin", now() + Duration::hours(1)))
        .await;
    let before = app.store.list().await;

    let unknown = ID::new();
    app.store.remove(&unknown).await;

    assert_eq!(app.store.list().await, before);
    assert_eq!(app.center.pending_requests().await.len(), 1);
    assert_eq!(app.center.removals(), vec![unknown.as_string()]);

    let never_scheduled = ID::new();
    app.scheduler.cancel(&never_scheduled).await;
    assert_eq!(
        app.center.removals(),
        vec![unknown.as_string(), never_scheduled.as_string()]
    );
    assert_eq!(app.center.pending_requests().await.len(), 1);
}

#[tokio::test]
async fn booked_appointment_is_reminded_an_hour_before() {
    let mut app = setup_app(now(), default_config());
    app.permission_gate.request_permission().await.unwrap();
    let date = Utc.with_ymd_and_hms(2023, 10, 6, 14, 30, 0).unwrap();

    let appointment = book_appointment(
        AppointmentBooking {
            patient_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            doctor_name: "Dr. Patel".into(),
            date,
        },
        &app.ctx,
    )
    .await
    .unwrap();

    let listed = app.store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].kind, ReminderKind::Appointment);
    assert_eq!(
        listed[0].body_text,
        "Your appointment with Dr. Patel is on Oct 6, 2023 at 2:30 PM."
    );
    assert_eq!(
        app.center.next_fire(&appointment.id.as_string()),
        Some(date - Duration::hours(1))
    );

    app.ctx.sys = Arc::new(StaticTimeSys(
        (date - Duration::hours(1)).timestamp_millis(),
    ));
    let delivered = deliver_notifications(&app.ctx).await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].content.title, "Upcoming Appointment Reminder");
    // One-shot notifications are gone once delivered
    assert!(app.center.pending_requests().await.is_empty());
}

#[tokio::test]
async fn health_alert_reminder_fires_after_delay() {
    let mut app = setup_app(now(), default_config());
    app.permission_gate.request_permission().await.unwrap();
    let alert = app.ctx.sample_data.health_alerts[0].clone();

    remind_about_health_alert(&alert.id, &app.ctx).await.unwrap();

    let pending = app.center.pending_requests().await;
    assert_eq!(
        pending[0].trigger,
        NotificationTrigger::TimeInterval {
            seconds: 10,
            repeats: false
        }
    );

    app.ctx.sys = Arc::new(StaticTimeSys(
        (now() + Duration::seconds(10)).timestamp_millis(),
    ));
    let delivered = deliver_notifications(&app.ctx).await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].content.title, "Health Alert: Influenza (Flu)");
}

#[tokio::test]
async fn denied_permission_keeps_reminders_but_delivers_nothing() {
    let mut app = setup_app(
        now(),
        Config {
            notifications_authorized: false,
            ..default_config()
        },
    );
    assert_eq!(
        app.permission_gate.request_permission().await,
        Ok(AuthorizationStatus::Denied)
    );

    app.store
        .add(Reminder::medicine("Aspirin", now() + Duration::minutes(5)))
        .await;
    assert_eq!(app.store.list().await.len(), 1);
    assert_eq!(app.center.pending_requests().await.len(), 1);

    app.ctx.sys = Arc::new(StaticTimeSys(
        (now() + Duration::minutes(5)).timestamp_millis(),
    ));
    assert!(deliver_notifications(&app.ctx).await.is_empty());
    assert_eq!(app.permission_gate.request_permission().await, Ok(AuthorizationStatus::Denied));
    assert_eq!(app.center.authorization_prompts(), 1);
}
