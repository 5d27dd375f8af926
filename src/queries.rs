pub mod likes;
pub mod matches;
pub mod messages;
pub mod users;
