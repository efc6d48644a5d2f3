#![allow(dead_code)]

use promocheck::{
    Arguments, Condition, CurrentWeather, DateRange, IsoDate, Restriction, Restrictions,
    WeatherCondition, WeatherError, WeatherProvider,
};
use proptest::prelude::*;

// --- Fixed argument schema ---
// age  : i64 (0..=120), sometimes absent
// town : one of TOWNS, sometimes absent or empty
//
// The weather stub reports a label from LABELS for every town except
// UNKNOWN_TOWN, whose lookup fails.

pub const TOWNS: &[&str] = &["Lyon", "Brest", "Nice", "Atlantis"];
pub const LABELS: &[&str] = &["Clear", "Clouds", "Rain", "Snow"];
pub const UNKNOWN_TOWN: &str = "Atlantis";

/// Weather source returning the same reading for every known town.
#[derive(Debug, Clone)]
pub struct FixedWeather {
    pub label: String,
    pub temperature: f64,
}

impl FixedWeather {
    pub fn new(label: &str, temperature: f64) -> Self {
        Self {
            label: label.to_owned(),
            temperature,
        }
    }
}

impl WeatherProvider for FixedWeather {
    fn current_weather(&self, town: &str) -> Result<CurrentWeather, WeatherError> {
        if town == UNKNOWN_TOWN {
            return Err(WeatherError::UnknownLocation {
                town: town.to_owned(),
            });
        }
        Ok(CurrentWeather {
            label: self.label.clone(),
            temperature: self.temperature,
        })
    }
}

pub fn arb_weather() -> impl Strategy<Value = FixedWeather> {
    (prop::sample::select(LABELS), -20_i32..=40)
        .prop_map(|(label, temp)| FixedWeather::new(label, f64::from(temp)))
}

/// Generate arguments that align with the fixed schema.
pub fn arb_arguments() -> impl Strategy<Value = Arguments> {
    (
        prop::option::of(0_i64..=120),
        prop::option::of(prop_oneof![
            prop::sample::select(TOWNS).prop_map(str::to_owned),
            Just(String::new()),
        ]),
    )
        .prop_map(|(age, town)| {
            let mut args = Arguments::new();
            if let Some(age) = age {
                args = args.with_age(age);
            }
            if let Some(town) = town {
                args = args.with_town(town);
            }
            args
        })
}

/// Days run to 31 in every month, so bounds such as `2024-02-30` appear.
fn arb_date() -> impl Strategy<Value = IsoDate> {
    (2020_i32..=2030, 1_u8..=12, 1_u8..=31)
        .prop_map(|(year, month, day)| IsoDate::new(year, month, day))
}

fn arb_date_range() -> impl Strategy<Value = DateRange> {
    prop_oneof![
        arb_date().prop_map(|after| DateRange::new().after(after)),
        arb_date().prop_map(|before| DateRange::new().before(before)),
        (arb_date(), arb_date()).prop_map(|(after, before)| DateRange::new().after(after).before(before)),
    ]
}

/// Age conditions are built in `eq`, `lt`, `gt` order, the order the
/// validator reads them in.
fn arb_age() -> impl Strategy<Value = Condition> {
    (
        prop::option::of(0_i64..=120),
        prop::option::of(0_i64..=120),
        prop::option::of(0_i64..=120),
    )
        .prop_map(|(eq, lt, gt)| {
            let mut condition = Condition::new();
            if let Some(eq) = eq {
                condition = condition.eq(eq);
            }
            if let Some(lt) = lt {
                condition = condition.lt(lt);
            }
            if let Some(gt) = gt {
                condition = condition.gt(gt);
            }
            condition
        })
}

fn arb_weather_condition() -> impl Strategy<Value = WeatherCondition> {
    (
        prop::sample::select(LABELS),
        prop::option::of((prop::option::of(-20_i64..=40), prop::option::of(-20_i64..=40))),
    )
        .prop_map(|(label, temp)| {
            let expected = WeatherCondition::new(&label.to_lowercase());
            match temp {
                None => expected,
                Some((gt, lt)) => {
                    let mut condition = Condition::new();
                    if let Some(gt) = gt {
                        condition = condition.gt(gt);
                    }
                    if let Some(lt) = lt {
                        condition = condition.lt(lt);
                    }
                    expected.temperature(condition)
                }
            }
        })
}

fn arb_leaf() -> impl Strategy<Value = Restriction> {
    prop_oneof![
        arb_date_range().prop_map(Restriction::Date),
        arb_age().prop_map(Restriction::Age),
        arb_weather_condition().prop_map(Restriction::Weather),
    ]
}

/// Generate a restriction tree with non-empty `or`/`and` nodes, bounded depth.
pub fn arb_restriction(max_depth: u32) -> impl Strategy<Value = Restriction> {
    arb_leaf().prop_recursive(max_depth, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..=3).prop_map(Restriction::Or),
            prop::collection::vec(inner, 1..=3).prop_map(Restriction::And),
        ]
    })
}

/// Generate a non-empty restriction list.
pub fn arb_restrictions() -> impl Strategy<Value = Restrictions> {
    prop::collection::vec(arb_restriction(3), 1..=4).prop_map(Restrictions::new)
}

/// Age-only trees: their outcome does not depend on the date or the weather.
pub fn arb_age_tree() -> impl Strategy<Value = Restriction> {
    arb_age()
        .prop_map(Restriction::Age)
        .prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..=3).prop_map(Restriction::Or),
                prop::collection::vec(inner, 1..=3).prop_map(Restriction::And),
            ]
        })
}
