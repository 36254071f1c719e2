//! Spoken response rendering.
//!
//! Renders a journey into the German sentence the voice assistant
//! speaks. Walk legs become walking instructions, later transit legs
//! become interchange instructions, and the answer always closes with
//! the arrival time.

use crate::domain::{JourneyResult, LegKind};

/// Spoken fallback when the lookup failed for any reason.
pub const FAILURE_MESSAGE: &str = "Verbindung konnte nicht abgefragt werden";

/// Options for response rendering.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    /// Stop after the first transit leg instead of describing every
    /// interchange.
    pub short_info: bool,
}

/// Render a journey result as a spoken German answer.
pub fn render_journey(result: &JourneyResult, options: &ResponseOptions) -> String {
    let mut out = String::new();

    for (i, leg) in result.legs.iter().enumerate() {
        match &leg.kind {
            LegKind::Walk { distance_m } => {
                out.push_str(&format!(
                    "{} Meter laufen bis {}. ",
                    distance_m, leg.destination_name
                ));
            }
            LegKind::Transit {
                line,
                category,
                direction,
            } => {
                let title = train_title(category.as_deref(), line);
                let direction = direction.as_deref().unwrap_or(&leg.destination_name);
                let departure = leg.departure.format("%H:%M");

                if i == 0 {
                    out.push_str(&format!("{title} Richtung {direction} um {departure} Uhr. "));
                } else {
                    out.push_str(&format!(
                        "Umsteigen an {} zu {title} Richtung {direction} um {departure} Uhr. ",
                        leg.origin_name
                    ));
                }

                if options.short_info {
                    break;
                }
            }
        }
    }

    out.push_str(&format!(
        "Ankunft um {} Uhr.",
        result.arrival_time.format("%H:%M")
    ));
    out
}

/// How to announce a vehicle.
///
/// U-Bahn and S-Bahn line names ("U4", "S8") read poorly on their own,
/// so the category is spoken first.
fn train_title(category: Option<&str>, line: &str) -> String {
    match category {
        Some(c @ ("U-Bahn" | "S-Bahn")) => format!("{c} {line}"),
        _ => line.to_string(),
    }
}
