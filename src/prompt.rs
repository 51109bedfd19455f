//! Interactive prompts: the city and time filter for a session pass, plus
//! the yes/no questions asked by the pager and the restart check.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::data::filter::{Filters, TimeFilter};
use crate::data::model::{weekday_from_name, City, Month};

pub const SEPARATOR_WIDTH: usize = 40;

const INVALID_INPUT: &str = "That's not a valid input";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error("input closed while waiting for an answer")]
    InputClosed,
}

/// Progress of a single validated question.
enum PromptState<T> {
    AwaitingInput,
    Invalid,
    Valid(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Month,
    Day,
    None,
}

impl FilterKind {
    fn from_name(name: &str) -> Option<FilterKind> {
        match name {
            "month" => Some(FilterKind::Month),
            "day" => Some(FilterKind::Day),
            "none" => Some(FilterKind::None),
            _ => None,
        }
    }
}

/// Line-oriented question/answer channel over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for everything that is not a question (reports, raw rows).
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    /// Print `question` and read one answer, trimmed and lower-cased.
    /// `None` means the input stream is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until `parse` accepts the answer. There is no retry limit; only
    /// the end of input stops the loop.
    pub fn choose<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        let mut state = PromptState::AwaitingInput;
        loop {
            state = match state {
                PromptState::AwaitingInput => {
                    let answer = self.ask(question)?.ok_or(PromptError::InputClosed)?;
                    match parse(&answer) {
                        Some(value) => PromptState::Valid(value),
                        None => {
                            debug!("rejected answer {answer:?}");
                            PromptState::Invalid
                        }
                    }
                }
                PromptState::Invalid => {
                    writeln!(self.output, "{INVALID_INPUT}")?;
                    PromptState::AwaitingInput
                }
                PromptState::Valid(value) => return Ok(value),
            };
        }
    }

    /// `true` only for an exact (case-insensitive) `yes`. A closed input
    /// counts as `no`.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)?.is_some_and(|answer| answer == "yes"))
    }

    /// Collect the city and the optional month or day filter.
    pub fn get_filters(&mut self) -> Result<Filters, PromptError> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = self.choose(
            "Would you like to analyze Chicago, New York City, or Washington?\n",
            City::from_name,
        )?;
        let kind = self.choose(
            "Would you like to filter by month, day, or not at all? Type \"none\" for no time filter\n",
            FilterKind::from_name,
        )?;
        let time = match kind {
            FilterKind::Month => TimeFilter::Month(self.choose(
                "Which month? January, February, March, April, May, or June? Please type full month name\n",
                Month::from_name,
            )?),
            FilterKind::Day => TimeFilter::Day(self.choose(
                "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday? Please type full day name\n",
                weekday_from_name,
            )?),
            FilterKind::None => TimeFilter::None,
        };

        self.separator()?;
        Ok(Filters { city, time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn month_filter_is_collected() {
        let mut p = prompt("Chicago\nmonth\nMarch\n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.city, City::Chicago);
        assert_eq!(filters.time, TimeFilter::Month(Month::March));
        assert_eq!(filters.day_label(), "all");
    }

    #[test]
    fn day_filter_is_collected() {
        let mut p = prompt("washington\nDAY\n  sunday \n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.city, City::Washington);
        assert_eq!(filters.time, TimeFilter::Day(Weekday::Sun));
        assert_eq!(filters.month_label(), "all");
    }

    #[test]
    fn none_skips_the_value_prompt() {
        let mut p = prompt("new york city\nnone\n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.city, City::NewYorkCity);
        assert_eq!(filters.time, TimeFilter::None);
        let out = output(p);
        assert!(!out.contains("Which month?"));
        assert!(!out.contains("Which day?"));
        assert!(out.ends_with(&format!("{}\n", "-".repeat(SEPARATOR_WIDTH))));
    }

    #[test]
    fn invalid_city_is_asked_again_until_valid() {
        let mut p = prompt("boston\nnew york\nnewyorkcity\nNew York City\nnone\n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.city, City::NewYorkCity);
        let out = output(p);
        assert_eq!(out.matches(INVALID_INPUT).count(), 3);
        assert_eq!(out.matches("Would you like to analyze").count(), 4);
    }

    #[test]
    fn months_after_june_are_rejected() {
        let mut p = prompt("chicago\nmonth\njuly\njune\n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.time, TimeFilter::Month(Month::June));
        assert_eq!(output(p).matches(INVALID_INPUT).count(), 1);
    }

    #[test]
    fn abbreviated_day_is_rejected() {
        let mut p = prompt("chicago\nday\nmon\nmonday\n");
        let filters = p.get_filters().unwrap();
        assert_eq!(filters.time, TimeFilter::Day(Weekday::Mon));
    }

    #[test]
    fn closed_input_ends_the_retry_loop() {
        let mut p = prompt("atlantis\n");
        let err = p.get_filters().unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }

    #[test]
    fn confirm_requires_exact_yes() {
        let mut p = prompt("YES\ny\n yes \nno\n");
        assert!(p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
    }
}
