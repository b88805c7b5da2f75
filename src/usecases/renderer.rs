//! Renders a weather observation into the presentation surface.

use crate::domain::{WeatherObservation, condition_label};
use crate::ports::PresentationPort;

/// Alert shown when there is nothing to render.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Write title, temperature and the three list rows (humidity, wind speed, condition)
/// for `place`. With no observation only the [`NO_DATA_MESSAGE`] alert is emitted.
pub fn render_weather(
    surface: &dyn PresentationPort,
    observation: Option<&WeatherObservation>,
    place: &str,
) {
    let Some(obs) = observation else {
        surface.alert(NO_DATA_MESSAGE);
        return;
    };

    surface.set_title(&format!("Weather in {}", place));
    surface.set_temperature(&format!("Temperature: {}°C", obs.temperature));

    let rows = [
        format!("Humidity: {}%", obs.humidity),
        format!("Wind Speed: {} m/s", obs.wind_speed),
        format!("Condition: {}", condition_label(obs.weather_code)),
    ];
    for (index, row) in rows.iter().enumerate() {
        surface.set_list_item(index, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ui::memory::{MemorySurface, SurfaceWrite};

    fn paris() -> WeatherObservation {
        WeatherObservation {
            temperature: 15.0,
            humidity: 70.0,
            wind_speed: 4.2,
            weather_code: 3,
        }
    }

    #[test]
    fn test_render_writes_all_elements_in_order() {
        let surface = MemorySurface::new();
        render_weather(&surface, Some(&paris()), "Paris");

        assert_eq!(
            surface.writes(),
            vec![
                SurfaceWrite::Title("Weather in Paris".into()),
                SurfaceWrite::Temperature("Temperature: 15°C".into()),
                SurfaceWrite::ListItem(0, "Humidity: 70%".into()),
                SurfaceWrite::ListItem(1, "Wind Speed: 4.2 m/s".into()),
                SurfaceWrite::ListItem(2, "Condition: Overcast".into()),
            ]
        );
    }

    #[test]
    fn test_render_without_observation_only_alerts() {
        let surface = MemorySurface::new();
        render_weather(&surface, None, "Paris");

        assert_eq!(
            surface.writes(),
            vec![SurfaceWrite::Alert(NO_DATA_MESSAGE.into())]
        );
        assert!(surface.element_writes().is_empty());
    }

    #[test]
    fn test_render_unknown_code_and_fractional_values() {
        let surface = MemorySurface::new();
        let obs = WeatherObservation {
            temperature: -3.5,
            humidity: 88.0,
            wind_speed: 0.0,
            weather_code: 95,
        };
        render_weather(&surface, Some(&obs), "Reykjavík");

        let writes = surface.writes();
        assert_eq!(writes[0], SurfaceWrite::Title("Weather in Reykjavík".into()));
        assert_eq!(writes[1], SurfaceWrite::Temperature("Temperature: -3.5°C".into()));
        assert_eq!(writes[3], SurfaceWrite::ListItem(1, "Wind Speed: 0 m/s".into()));
        assert_eq!(writes[4], SurfaceWrite::ListItem(2, "Condition: Unknown".into()));
    }
}
