//! Scaling plan: what changes beyond ingredient amounts when a recipe is
//! cooked for a different number of people.

use mise_kitchen::format_time;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::debug;

use crate::RecipeError;

const TIP_EQUIPMENT: &str = "Major scaling may require equipment changes (larger pots, multiple batches)";
const TIP_SEASONING: &str = "Taste and adjust seasonings gradually - they don't always scale linearly";
const TIP_BATCHES: &str = "Consider cooking in batches if your equipment is too small";
const TIP_TIMING: &str = "Small amounts can cook faster - watch timing carefully";
const TIP_EGGS: &str = "Some ingredients (like eggs) may be hard to scale down precisely";
const TIP_SCALE: &str = "Use kitchen scale for accuracy with fractional measurements";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingTimes {
    /// Minutes
    pub prep: u32,
    /// Minutes
    pub cook: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleDirection {
    Up,
    Down,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeAdjustment {
    pub original: CookingTimes,
    pub adjusted: CookingTimes,
}

impl TimeAdjustment {
    pub fn prep_delta(&self) -> i64 {
        self.adjusted.prep as i64 - self.original.prep as i64
    }

    pub fn cook_delta(&self) -> i64 {
        self.adjusted.cook as i64 - self.original.cook as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingPlan {
    pub original_servings: u32,
    pub target_servings: u32,
    pub factor: f64,
    pub direction: ScaleDirection,
    /// More than double or less than half
    pub major: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<TimeAdjustment>,
    pub tips: Vec<&'static str>,
    pub equipment_notes: Vec<&'static str>,
}

/// Work out the scale factor, time changes and advice for a serving change
pub fn plan_scaling(
    original_servings: u32,
    target_servings: u32,
    times: Option<CookingTimes>,
) -> Result<ScalingPlan, RecipeError> {
    if original_servings == 0 || target_servings == 0 {
        return Err(RecipeError::InvalidServings {
            original: original_servings,
            target: target_servings,
        });
    }

    let factor = target_servings as f64 / original_servings as f64;
    let direction = if factor > 1.0 {
        ScaleDirection::Up
    } else if factor < 1.0 {
        ScaleDirection::Down
    } else {
        ScaleDirection::Unchanged
    };
    let major = factor > 2.0 || factor < 0.5;

    let times = times.map(|original| TimeAdjustment {
        original,
        adjusted: adjust_times(original, direction, major),
    });

    let mut tips = Vec::new();
    if major {
        tips.push(TIP_EQUIPMENT);
    }
    match direction {
        ScaleDirection::Up => tips.extend([TIP_SEASONING, TIP_BATCHES]),
        ScaleDirection::Down => tips.extend([TIP_TIMING, TIP_EGGS]),
        ScaleDirection::Unchanged => {}
    }
    if factor.fract() != 0.0 {
        tips.push(TIP_SCALE);
    }

    let equipment_notes = match (major, direction) {
        (true, ScaleDirection::Up) => vec![
            "Larger pots, pans, and mixing bowls may be needed",
            "Consider batch cooking if equipment is limiting",
        ],
        (true, _) => vec![
            "Smaller pots, pans, and mixing bowls may be needed",
            "Smaller equipment may cook faster",
        ],
        (false, _) => Vec::new(),
    };

    debug!(original_servings, target_servings, factor, major, "planned scaling");

    Ok(ScalingPlan {
        original_servings,
        target_servings,
        factor,
        direction,
        major,
        times,
        tips,
        equipment_notes,
    })
}

fn adjust_times(original: CookingTimes, direction: ScaleDirection, major: bool) -> CookingTimes {
    let prep = match direction {
        ScaleDirection::Up => (original.prep as f64 * 1.1).ceil() as u32,
        _ => original.prep,
    };
    let cook = match (major, direction) {
        (true, ScaleDirection::Up) => (original.cook as f64 * 1.15).ceil() as u32,
        (true, _) => (original.cook as f64 * 0.9).ceil() as u32,
        (false, _) => original.cook,
    };
    CookingTimes { prep, cook }
}

fn signed_minutes(delta: i64) -> String {
    if delta > 0 {
        format!("+{} min", delta)
    } else {
        format!("{} min", delta)
    }
}

impl ScalingPlan {
    pub fn batch_cooking_recommended(&self) -> bool {
        self.major && self.direction == ScaleDirection::Up
    }

    /// Plain-text report of the plan
    pub fn summary(&self, recipe_name: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\"{}\" scaled from {} to {} servings",
            recipe_name, self.original_servings, self.target_servings
        );
        let _ = writeln!(out, "Scale factor: {:.2}x", self.factor);
        let _ = writeln!(out);
        let _ = writeln!(out, "Instructions:");
        let _ = writeln!(out, "- Multiply all ingredient amounts by {:.2}", self.factor);
        let _ = writeln!(out, "- Round to convenient measurements (1.3 cups -> 1⅓ cups)");

        if let Some(times) = &self.times {
            let _ = writeln!(out);
            let _ = writeln!(out, "Adjusted times:");
            let _ = writeln!(
                out,
                "- Prep: {} ({})",
                format_time(Some(times.adjusted.prep)),
                signed_minutes(times.prep_delta())
            );
            let _ = writeln!(
                out,
                "- Cook: {} ({})",
                format_time(Some(times.adjusted.cook)),
                signed_minutes(times.cook_delta())
            );
        }

        for (heading, lines) in [("Scaling tips:", &self.tips), ("Equipment notes:", &self.equipment_notes)] {
            if lines.is_empty() {
                continue;
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", heading);
            for line in lines {
                let _ = writeln!(out, "- {}", line);
            }
        }

        out
    }
}
