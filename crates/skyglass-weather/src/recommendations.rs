//! Short activity suggestions derived from current conditions.

use crate::condition::{classify, ConditionCategory};
use crate::types::CurrentConditions;

const MAX_RECOMMENDATIONS: usize = 3;

/// Up to three suggestions: temperature advice first, then condition advice.
pub fn recommendations(current: &CurrentConditions) -> Vec<&'static str> {
    let temp = current.temperature.celsius();
    let mut out = Vec::with_capacity(4);

    if temp > 30.0 {
        out.push("Stay hydrated and seek shade when outdoors");
        out.push("Consider indoor activities to avoid heat");
    } else if temp > 25.0 {
        out.push("Great weather for outdoor activities");
        out.push("Perfect time for a picnic or beach visit");
    } else if temp > 15.0 {
        out.push("Comfortable temperature for most outdoor activities");
        out.push("Good time for hiking or cycling");
    } else if temp > 5.0 {
        out.push("Wear a light jacket for outdoor activities");
        out.push("Good weather for running or brisk walking");
    } else {
        out.push("Dress warmly in layers if going outside");
        out.push("Great day for indoor activities");
    }

    match classify(&current.condition_text, current.is_day) {
        ConditionCategory::Storm => {
            out.push("Stay indoors and away from windows during storms");
            out.push("Avoid open areas and tall structures if outside");
        }
        ConditionCategory::Rain => {
            out.push("Don't forget your umbrella");
            out.push("Indoor activities recommended");
        }
        ConditionCategory::Snow => {
            out.push("Drive carefully on potentially slippery roads");
            out.push("Good day for winter sports if it's not too heavy");
        }
        ConditionCategory::Fog => {
            out.push("Drive with caution due to reduced visibility");
        }
        ConditionCategory::ClearDay => {
            out.push("Don't forget sunscreen if you're outside");
            if temp > 25.0 {
                out.push("Great day for water activities");
            }
        }
        ConditionCategory::ClearNight => {
            out.push("Clear night - good for stargazing");
        }
        ConditionCategory::Cloudy | ConditionCategory::Default => {}
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}
