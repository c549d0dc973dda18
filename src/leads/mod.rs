pub mod source;
pub mod types;
pub mod validation;

pub use source::{load_leads, LeadFile};
pub use types::{
    CustomerType, IntentDetail, LeadAttributes, LeadId, MarketContext, PriceRange, PropertyType,
    Season, Sentiment,
};
pub use validation::{validate_lead, validate_leads, AttributeError};
