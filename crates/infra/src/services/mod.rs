mod notification_center;

pub use notification_center::{
    INotificationCenter, InMemoryNotificationCenter, NotificationCenterError,
};
