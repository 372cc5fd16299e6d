pub mod member_mapper;
pub mod payment_mapper;
pub mod statistics_mapper;
pub mod user_mapper;

pub use member_mapper::MemberMapper;
pub use payment_mapper::PaymentMapper;
pub use statistics_mapper::StatisticsMapper;
pub use user_mapper::UserMapper;

/// Date format used by every DTO
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
