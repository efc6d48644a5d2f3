mod advantage;
mod arguments;
mod condition;
mod decision;
mod error;
mod failure_reasons;
mod promo_code;
mod restriction;
mod value;

pub use advantage::{Advantage, validate_advantage};
pub use arguments::{Arguments, validate_arguments};
pub use condition::{CompareOp, Condition};
pub use decision::Decision;
pub use error::{ArgumentError, ValidationError};
pub use failure_reasons::FailureReasons;
pub use promo_code::{NewPromoCode, PromoCode};
pub use restriction::{DateRange, Restriction, Restrictions, WeatherCondition};
pub use value::Value;
