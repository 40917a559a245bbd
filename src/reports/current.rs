//! Current temperature table

/// Temperature observed at one place
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub name: String,
    /// Degrees Fahrenheit
    pub temperature_f: f64,
}

/// Current temperatures in table order
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub readings: Vec<TemperatureReading>,
}

impl CurrentReport {
    /// Column width for place names: the longest name, without its colon
    #[must_use]
    pub fn padding(&self) -> usize {
        self.readings
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let padding = self.padding();
        let rows: String = self
            .readings
            .iter()
            .map(|r| {
                format!(
                    "  {:<padding$}  {:.0}\n",
                    format!("{}:", r.name),
                    r.temperature_f
                )
            })
            .collect();
        format!("\nCurrent temperature\n{rows}\n")
    }
}
