use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::data::loader::load_data;
use crate::pager::display_raw_data;
use crate::prompt::Prompt;
use crate::report::duration::print_duration_stats;
use crate::report::station::print_station_stats;
use crate::report::time::print_time_stats;
use crate::report::user::print_user_stats;

/// Runs session passes until the user declines to restart.
pub struct Session<R, W> {
    prompt: Prompt<R, W>,
    /// Directory holding the city CSV files.
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompt: Prompt::new(input, output),
            data_dir: data_dir.into(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Loop over passes. Returns the number of passes completed.
    pub fn run(&mut self) -> Result<usize> {
        let mut passes = 0;
        loop {
            self.run_pass()?;
            passes += 1;
            let restart = self
                .prompt
                .confirm("\nWould you like to restart? Enter yes or no.\n")
                .context("reading restart answer")?;
            if !restart {
                info!("session ended after {passes} pass(es)");
                return Ok(passes);
            }
        }
    }

    /// collect filters → load → four reports → raw rows.
    fn run_pass(&mut self) -> Result<()> {
        let filters = self.prompt.get_filters().context("collecting filters")?;
        info!("filters: {filters}");

        let table = load_data(&self.data_dir, filters.city, filters.time)
            .with_context(|| format!("loading trips for {}", filters.city))?;

        let out = self.prompt.out();
        print_time_stats(&table, out)?;
        print_station_stats(&table, out)?;
        print_duration_stats(&table, out)?;
        print_user_stats(&table, out)?;

        display_raw_data(&mut self.prompt, &table).context("paging raw rows")?;
        Ok(())
    }
}
