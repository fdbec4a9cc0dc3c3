use serde::{Deserialize, Serialize};

/// Display unit for temperatures. Data is always held in °F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    pub fn convert(self, temp_f: i32) -> f64 {
        let f = f64::from(temp_f);
        match self {
            Self::Fahrenheit => f,
            Self::Celsius => (f - 32.0) * (5.0 / 9.0),
        }
    }

    /// Converted and rounded for display.
    pub fn display(self, temp_f: i32) -> i32 {
        self.convert(temp_f).round() as i32
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "c" | "celsius" => Ok(Self::Celsius),
            _ => Err(anyhow::anyhow!("Unknown temperature unit '{s}'. Use 'f' or 'c'.")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_is_identity() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert(64), 64.0);
        assert_eq!(TemperatureUnit::Fahrenheit.display(64), 64);
    }

    #[test]
    fn celsius_conversion() {
        assert_eq!(TemperatureUnit::Celsius.convert(32), 0.0);
        assert_eq!(TemperatureUnit::Celsius.convert(212), 100.0);
        assert_eq!(TemperatureUnit::Celsius.display(64), 18);
        assert_eq!(TemperatureUnit::Celsius.display(-40), -40);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let unit = TemperatureUnit::default();
        assert_eq!(unit.toggle(), TemperatureUnit::Celsius);
        assert_eq!(unit.toggle().toggle(), unit);
        assert_eq!(Theme::default().toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("fahrenheit".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn symbols() {
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
    }
}
