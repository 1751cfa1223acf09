mod book_appointment;

pub use book_appointment::book_appointment;
