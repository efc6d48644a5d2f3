mod error;
mod evaluate;
pub mod parse;
pub mod service;
pub mod store;
mod types;
mod validate;
pub mod weather;

pub use error::PromoCodeError;
pub use evaluate::{Evaluator, decide, evaluate_restrictions};
pub use parse::{IsoDate, is_valid_date};
pub use service::PromoCodes;
pub use store::{InMemoryStore, PromoCodeStore, StoreError};
pub use types::{
    Advantage, ArgumentError, Arguments, CompareOp, Condition, DateRange, Decision,
    FailureReasons, NewPromoCode, PromoCode, Restriction, Restrictions, ValidationError, Value,
    WeatherCondition, validate_advantage, validate_arguments,
};
pub use validate::validate_restrictions;
pub use weather::{CurrentWeather, OpenWeatherClient, WeatherConfig, WeatherError, WeatherProvider};
