//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    formatter::ChronoFormatter,
    ports::{ClockPort, LocaleFormatterPort},
    settings::AdapterSettings,
};
use crate::use_cases::CalendarAdapter;

/// Main application state.
pub struct App {
    pub calendar: Arc<CalendarAdapter>,
}

impl App {
    /// Compose the app from explicit ports.
    pub fn new(
        clock: Arc<dyn ClockPort>,
        formatter: Arc<dyn LocaleFormatterPort>,
        settings: AdapterSettings,
    ) -> Self {
        Self {
            calendar: Arc::new(CalendarAdapter::new(clock, formatter, settings)),
        }
    }

    /// Compose the app with the system clock and the chrono formatter.
    pub fn with_system_ports(settings: AdapterSettings) -> Self {
        Self::new(
            Arc::new(SystemClock::new()),
            Arc::new(ChronoFormatter::new()),
            settings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_domain::DateValue;

    use crate::infrastructure::clock::FixedClock;

    #[test]
    fn app_wires_settings_into_the_adapter() {
        let now = DateValue::from_ymd(2024, 2, 29).unwrap();
        let app = App::new(
            Arc::new(FixedClock(now)),
            Arc::new(ChronoFormatter::new()),
            AdapterSettings::new(Some("en-GB".to_string()), Default::default()),
        );

        assert_eq!(app.calendar.get_current_locale_code(), "en-GB");
        assert_eq!(
            app.calendar.date(crate::use_cases::DateInput::Now).unwrap(),
            Some(now)
        );
    }

    #[test]
    fn system_app_uses_default_locale() {
        let app = App::with_system_ports(AdapterSettings::default());
        assert_eq!(app.calendar.get_current_locale_code(), "en-US");
    }
}
