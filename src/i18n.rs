//! Locale table
//!
//! Every user-visible string lives here as plain data, one [`Strings`] table
//! per supported locale. Templates use `{name}` placeholders filled in by the
//! helper methods on [`Strings`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    PtBr,
    EsEs,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::PtBr, Locale::EsEs];

    /// BCP 47 tag, e.g. `pt-BR`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
            Locale::EsEs => "es-ES",
        }
    }

    /// The string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::EnUs => &EN_US,
            Locale::PtBr => &PT_BR,
            Locale::EsEs => &ES_ES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid language '{}'. Valid options are: en-US, pt-BR, es-ES",
                    s
                )
            })
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

/// All display strings for one locale.
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub tagline: &'static str,
    pub config_title: &'static str,
    pub last_period: &'static str,
    pub cycle_length: &'static str,
    pub period_length: &'static str,
    pub menstruation: &'static str,
    pub fertile: &'static str,
    pub ovulation: &'static str,
    pub today: &'static str,
    pub please_set: &'static str,
    /// Shown by the event listing when no day in the range is labeled
    pub no_events: &'static str,
    /// Footer template with `{date}` and `{cycle}` placeholders
    pub prediction_based: &'static str,
    /// Month header template with `{month}` and `{year}` placeholders
    pub month_year: &'static str,
    /// Short weekday names, Sunday first
    pub weekdays: [&'static str; 7],
    /// Long month names, January first
    pub months: [&'static str; 12],
}

impl Strings {
    /// Footer note echoing the prediction inputs.
    pub fn prediction_based(&self, date_iso: &str, cycle_length: i64) -> String {
        self.prediction_based
            .replace("{date}", date_iso)
            .replace("{cycle}", &cycle_length.to_string())
    }

    /// Month header such as "March 2025" or "março de 2025".
    ///
    /// `month` is 1-based; out-of-range values are clamped.
    pub fn month_label(&self, year: i32, month: u32) -> String {
        let idx = month.clamp(1, 12) as usize - 1;
        self.month_year
            .replace("{month}", self.months[idx])
            .replace("{year}", &year.to_string())
    }
}

static EN_US: Strings = Strings {
    app_title: "Female Cycle",
    tagline: "Menstrual Cycle Calendar - Respect the menstrual cycle: empathy and dignity for all",
    config_title: "Initial Configuration",
    last_period: "Start of Last Period",
    cycle_length: "Average Cycle Length (days)",
    period_length: "Average Period Length (days)",
    menstruation: "Menstruation",
    fertile: "Fertile Window",
    ovulation: "Ovulation",
    today: "Today",
    please_set: "Please set your last period and cycle preferences to see predictions.",
    no_events: "No predicted events",
    prediction_based: "Prediction based on: {date} | {cycle} days (cycle)",
    month_year: "{month} {year}",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
};

static PT_BR: Strings = Strings {
    app_title: "Ciclo Feminino",
    tagline: "Calendário Menstrual - Respeite o ciclo menstrual: empatia e dignidade para todas as mulheres",
    config_title: "Configuração Inicial",
    last_period: "Início da Última Menstruação",
    cycle_length: "Duração Média do Ciclo (dias)",
    period_length: "Duração Média do Período (dias)",
    menstruation: "Menstruação",
    fertile: "Janela Fértil",
    ovulation: "Ovulação",
    today: "Hoje",
    please_set: "Por favor, defina sua última menstruação e preferências para ver previsões.",
    no_events: "Nenhum evento previsto",
    prediction_based: "Previsão baseada em: {date} | {cycle} dias (ciclo)",
    month_year: "{month} de {year}",
    weekdays: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
    months: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
};

static ES_ES: Strings = Strings {
    app_title: "Ciclo Femenino",
    tagline: "Calendario Menstrual - Respeta el ciclo menstrual: empatía y dignidad para todas las mujeres",
    config_title: "Configuración Inicial",
    last_period: "Inicio de la Última Menstruación",
    cycle_length: "Duración Media del Ciclo (días)",
    period_length: "Duración Media del Período (días)",
    menstruation: "Menstruación",
    fertile: "Ventana Fértil",
    ovulation: "Ovulación",
    today: "Hoy",
    please_set: "Por favor, establezca su última menstruación y preferencias para ver predicciones.",
    no_events: "No hay eventos previstos",
    prediction_based: "Predicción basada en: {date} | {cycle} días (ciclo)",
    month_year: "{month} de {year}",
    weekdays: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        }
        assert_eq!("pt-br".parse::<Locale>(), Ok(Locale::PtBr));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("fr-FR".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn prediction_based_fills_placeholders() {
        assert_eq!(
            Locale::EnUs.strings().prediction_based("2025-01-01", 28),
            "Prediction based on: 2025-01-01 | 28 days (cycle)"
        );
        assert_eq!(
            Locale::PtBr.strings().prediction_based("2025-01-01", 30),
            "Previsão baseada em: 2025-01-01 | 30 dias (ciclo)"
        );
    }

    #[test]
    fn month_labels() {
        assert_eq!(Locale::EnUs.strings().month_label(2025, 3), "March 2025");
        assert_eq!(Locale::PtBr.strings().month_label(2025, 3), "março de 2025");
        assert_eq!(Locale::EsEs.strings().month_label(2024, 12), "diciembre de 2024");
    }

    #[test]
    fn weekdays_start_on_sunday() {
        for locale in Locale::ALL {
            assert_eq!(locale.strings().weekdays.len(), 7);
        }
        assert_eq!(Locale::EsEs.strings().weekdays[0], "Dom");
    }
}
