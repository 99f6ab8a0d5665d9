//! 영속화되는 도메인 엔티티

pub mod users;
