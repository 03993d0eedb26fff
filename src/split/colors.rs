//! Deterministic participant color assignment.

use std::collections::HashMap;

/// Hues 30 degrees apart around the wheel.
const HUE_COUNT: usize = 12;
const HUE_STEP: usize = 30;

/// Saturation levels cycled so adjacent participants differ even when
/// their hues collide after a full wheel revolution.
const SATURATIONS: [f64; 4] = [0.45, 0.55, 0.65, 0.75];

/// Assign an `hsl(...)` display color to each participant.
///
/// Purely a function of list position: `hue(i) = (i mod 12) * 30`,
/// saturation cycling through four fixed levels, lightness fixed at 60%.
pub fn generate_colors(people: &[String]) -> HashMap<String, String> {
    people
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let hue = (i % HUE_COUNT) * HUE_STEP;
            let saturation = SATURATIONS[i % SATURATIONS.len()];
            let color = format!("hsl({}, {}%, 60%)", hue, (saturation * 100.0) as u32);
            (person.clone(), color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("p{}", i)).collect()
    }

    #[test]
    fn test_first_colors() {
        let people = names(4);
        let colors = generate_colors(&people);

        assert_eq!(colors["p0"], "hsl(0, 45%, 60%)");
        assert_eq!(colors["p1"], "hsl(30, 55%, 60%)");
        assert_eq!(colors["p2"], "hsl(60, 65%, 60%)");
        assert_eq!(colors["p3"], "hsl(90, 75%, 60%)");
    }

    #[test]
    fn test_cycles_wrap() {
        let people = names(13);
        let colors = generate_colors(&people);

        // Saturation repeats every 4, hue every 12
        assert_eq!(colors["p4"], "hsl(120, 45%, 60%)");
        assert_eq!(colors["p12"], colors["p0"]);
    }

    #[test]
    fn test_deterministic() {
        let people = names(7);
        assert_eq!(generate_colors(&people), generate_colors(&people));
    }

    #[test]
    fn test_empty_list() {
        assert!(generate_colors(&[]).is_empty());
    }
}
