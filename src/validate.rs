use serde_json::{Map, Value as Json};

use crate::parse::{IsoDate, parse_date};
use crate::{Condition, DateRange, Restriction, ValidationError, WeatherCondition};

/// Check that a stored restriction document is well formed.
///
/// Checks run top-down and the first violation is returned. Every element of
/// every list is checked, including the children of `or`/`and` nodes.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_restrictions(document: &Json) -> Result<(), ValidationError> {
    restrictions_from_json(document).map(|_| ())
}

pub(crate) fn restrictions_from_json(document: &Json) -> Result<Vec<Restriction>, ValidationError> {
    let list = document
        .as_array()
        .ok_or(ValidationError::NotAnArrayOfObjects)?;
    if list.is_empty() {
        return Err(ValidationError::EmptyRestrictions);
    }
    list.iter().map(restriction).collect()
}

/// Tags are checked in this order; when a node carries several, the first wins.
fn restriction(element: &Json) -> Result<Restriction, ValidationError> {
    let node = element
        .as_object()
        .ok_or(ValidationError::NotAnArrayOfObjects)?;

    if let Some(body) = node.get("date") {
        return date_range(body).map(Restriction::Date);
    }
    if let Some(body) = node.get("or") {
        return children(body, "Or").map(Restriction::Or);
    }
    if let Some(body) = node.get("and") {
        return children(body, "And").map(Restriction::And);
    }
    if let Some(body) = node.get("age") {
        return age(body).map(Restriction::Age);
    }
    if let Some(body) = node.get("weather") {
        return weather(body).map(Restriction::Weather);
    }
    Err(ValidationError::UnknownRestriction)
}

fn children(body: &Json, field: &'static str) -> Result<Vec<Restriction>, ValidationError> {
    let list = body
        .as_array()
        .ok_or(ValidationError::NotAnArray { field })?;
    if list.is_empty() {
        return Err(ValidationError::EmptyArray { field });
    }
    list.iter().map(restriction).collect()
}

fn date_range(body: &Json) -> Result<DateRange, ValidationError> {
    let map = object(body, "Date")?;
    if !map.contains_key("after") && !map.contains_key("before") {
        return Err(ValidationError::MissingDateBound);
    }
    let after = string(map, "after", "After")?;
    let before = string(map, "before", "Before")?;

    Ok(DateRange {
        after: bound(after, "After")?,
        before: bound(before, "Before")?,
    })
}

fn age(body: &Json) -> Result<Condition, ValidationError> {
    let map = object(body, "Age")?;
    let mut condition = Condition::new();
    if let Some(eq) = integer(map, "eq", "eq")? {
        condition = condition.eq(eq);
    }
    if let Some(lt) = integer(map, "lt", "lt")? {
        condition = condition.lt(lt);
    }
    if let Some(gt) = integer(map, "gt", "gt")? {
        condition = condition.gt(gt);
    }
    Ok(condition)
}

fn weather(body: &Json) -> Result<WeatherCondition, ValidationError> {
    let map = object(body, "Weather")?;
    let label = map
        .get("is")
        .ok_or(ValidationError::MissingWeatherLabel)?;

    let temperature = match map.get("temp") {
        None => None,
        Some(temp) => {
            let temp = object(temp, "Temp")?;
            let mut condition = Condition::new();
            if let Some(gt) = integer(temp, "gt", "Gt")? {
                condition = condition.gt(gt);
            }
            if let Some(lt) = integer(temp, "lt", "Lt")? {
                condition = condition.lt(lt);
            }
            Some(condition)
        }
    };

    Ok(WeatherCondition {
        label: label.clone(),
        temperature,
    })
}

fn object<'a>(body: &'a Json, field: &'static str) -> Result<&'a Map<String, Json>, ValidationError> {
    body.as_object()
        .ok_or(ValidationError::NotAnObject { field })
}

fn string<'a>(
    map: &'a Map<String, Json>,
    key: &str,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    map.get(key)
        .map(|v| v.as_str().ok_or(ValidationError::NotAString { field }))
        .transpose()
}

fn integer(
    map: &Map<String, Json>,
    key: &str,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    map.get(key)
        .map(|v| match v.as_i64() {
            Some(n) => Ok(n),
            None if v.is_u64() => Err(ValidationError::IntegerOutOfRange { field }),
            None => Err(ValidationError::NotAnInteger { field }),
        })
        .transpose()
}

/// Any `YYYY-MM-DD` text is a bound; `2024-02-30` is kept as written.
fn bound(text: Option<&str>, field: &'static str) -> Result<Option<IsoDate>, ValidationError> {
    text.map(|t| parse_date(t).map_err(|_| ValidationError::DateFormat { field }))
        .transpose()
}
