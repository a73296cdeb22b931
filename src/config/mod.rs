pub mod publishing;

pub use publishing::{
    DashboardConfig, MailConfig, PaymentConfig, PublishingConfig, ScoopConfig, SelectionConfig,
};
