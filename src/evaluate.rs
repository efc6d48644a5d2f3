use std::ops::ControlFlow;
use std::slice;

use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::parse::IsoDate;
use crate::weather::WeatherProvider;
use crate::{
    ArgumentError, Arguments, Condition, DateRange, FailureReasons, Restriction, Restrictions,
    Value, WeatherCondition,
};

pub(crate) const AGE_NOT_MET: &str = "Age condition not met.";
pub(crate) const WEATHER_NOT_MET: &str = "Weather condition not met.";
pub(crate) const TEMPERATURE_NOT_MET: &str = "Weather temperature condition not met.";

/// Walks restriction trees for a fixed calendar date.
///
/// A successful `or` or `and` node ends the evaluation of the list it sits
/// in: that list reports no failures, whatever its other members produced.
/// Children of `or`/`and` are each evaluated as their own one-element list.
pub struct Evaluator<'w, W: WeatherProvider + ?Sized> {
    weather: &'w W,
    today: Date,
}

impl<'w, W: WeatherProvider + ?Sized> Evaluator<'w, W> {
    /// Evaluate against today's date.
    ///
    /// "Today" is the calendar date in UTC, not in the host's local time
    /// zone, so near midnight it can differ from the local date. Use
    /// [`on`](Self::on) to pin the date.
    #[must_use]
    pub fn new(weather: &'w W) -> Self {
        Self {
            weather,
            today: OffsetDateTime::now_utc().date(),
        }
    }

    /// Evaluate as if `today` were the current date.
    #[must_use]
    pub fn on(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn today(&self) -> Date {
        self.today
    }

    /// Evaluate `restrictions` and collect the reasons they are not met.
    #[must_use]
    pub fn evaluate(&self, restrictions: &[Restriction], arguments: &Arguments) -> FailureReasons {
        let mut reasons = FailureReasons::new();
        let flow = restrictions
            .iter()
            .try_for_each(|restriction| self.node(restriction, arguments, &mut reasons));
        match flow {
            ControlFlow::Continue(()) => reasons,
            ControlFlow::Break(()) => {
                debug!(discarded = reasons.len(), "boolean node satisfied, list accepted");
                FailureReasons::new()
            }
        }
    }

    fn node(
        &self,
        restriction: &Restriction,
        arguments: &Arguments,
        reasons: &mut FailureReasons,
    ) -> ControlFlow<()> {
        match restriction {
            Restriction::Date(range) => self.date(range, reasons),
            Restriction::Age(condition) => age(condition, arguments, reasons),
            Restriction::Weather(weather) => self.weather(weather, arguments, reasons),
            Restriction::Or(children) => {
                let mut gathered = FailureReasons::new();
                for child in children {
                    let failed = self.evaluate(slice::from_ref(child), arguments);
                    if failed.is_empty() {
                        return ControlFlow::Break(());
                    }
                    gathered.merge(failed);
                }
                reasons.merge(gathered);
            }
            Restriction::And(children) => {
                let mut gathered = FailureReasons::new();
                for child in children {
                    gathered.merge(self.evaluate(slice::from_ref(child), arguments));
                }
                if gathered.is_empty() {
                    return ControlFlow::Break(());
                }
                reasons.merge(gathered);
            }
        }
        ControlFlow::Continue(())
    }

    fn date(&self, range: &DateRange, reasons: &mut FailureReasons) {
        let today = IsoDate::from(self.today);
        if let Some(after) = range.after
            && today < after
        {
            reasons.insert(format!("Date must be after {after}."));
        }
        if let Some(before) = range.before
            && today >= before
        {
            reasons.insert(format!("Date must be before {before}."));
        }
    }

    fn weather(&self, condition: &WeatherCondition, arguments: &Arguments, reasons: &mut FailureReasons) {
        let Some(town) = arguments.town().filter(|town| !town.is_empty()) else {
            reasons.insert(WEATHER_NOT_MET);
            return;
        };

        let current = match self.weather.current_weather(town) {
            Ok(current) => current,
            Err(err) => {
                warn!(town, error = %err, "weather lookup failed");
                reasons.insert(format!("Failed to retrieve weather for location {town}."));
                return;
            }
        };
        debug!(town, label = %current.label, temperature = current.temperature, "weather resolved");

        let label = current.label.to_lowercase();
        if let Some(wanted) = condition.expected()
            && wanted.to_lowercase() != label
        {
            reasons.insert(format!("Weather must be {wanted} - current weather: {label}."));
        }
        if let Some(temperature) = &condition.temperature
            && !temperature.check(&Value::Float(current.temperature))
        {
            reasons.insert(TEMPERATURE_NOT_MET);
        }
    }
}

fn age(condition: &Condition, arguments: &Arguments, reasons: &mut FailureReasons) {
    let met = match arguments.age() {
        None | Some(0) => false,
        Some(age) => condition.check(&Value::Int(age)),
    };
    if !met {
        reasons.insert(AGE_NOT_MET);
    }
}

/// Evaluate a promo code's restrictions against today's date.
///
/// An empty list yields no failures.
#[must_use]
pub fn evaluate_restrictions<W: WeatherProvider + ?Sized>(
    restrictions: &Restrictions,
    arguments: &Arguments,
    weather: &W,
) -> FailureReasons {
    Evaluator::new(weather).evaluate(restrictions.as_slice(), arguments)
}

/// Decide whether a promo code applies to a caller's raw arguments.
///
/// Codes without restrictions are accepted without looking at the
/// arguments. Otherwise the arguments are checked before any restriction is
/// evaluated.
///
/// # Errors
///
/// Returns [`ArgumentError`] if the arguments are malformed.
pub fn decide<W: WeatherProvider + ?Sized>(
    restrictions: &Restrictions,
    arguments: &serde_json::Value,
    weather: &W,
) -> Result<FailureReasons, ArgumentError> {
    if restrictions.is_empty() {
        return Ok(FailureReasons::new());
    }
    let arguments = Arguments::from_json(arguments)?;
    Ok(evaluate_restrictions(restrictions, &arguments, weather))
}
