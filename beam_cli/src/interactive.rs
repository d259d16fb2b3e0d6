//! Prompt-driven input for `beam interactive`.
//!
//! Every prompt shows a default in brackets. An empty answer (or end of
//! input) takes the default; anything else must parse, or the whole input is
//! rejected with `InvalidInput`.

use std::io::{BufRead, Write};

use beam_core::{BeamError, BeamResult, LoadSet};

use crate::form::{load_count, parse_number};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// The trimmed answer, or `None` for an empty line or end of input
    fn answer(&mut self, prompt: &str) -> BeamResult<Option<String>> {
        let io_error = |e: std::io::Error| BeamError::file_error("prompt", "<terminal>", e.to_string());

        write!(self.output, "{prompt}").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        let trimmed = line.trim();
        Ok((read > 0 && !trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn prompt_f64(&mut self, prompt: &str, field: &str, default: f64) -> BeamResult<f64> {
        match self.answer(prompt)? {
            Some(raw) => parse_number(&raw, field),
            None => Ok(default),
        }
    }

    pub fn prompt_count(&mut self, prompt: &str, field: &str, default: usize) -> BeamResult<usize> {
        match self.answer(prompt)? {
            Some(raw) => load_count(&raw, field),
            None => Ok(default),
        }
    }

    /// Ask for span, point loads and UDL, then validate the result
    pub fn read_load_set(&mut self) -> BeamResult<LoadSet> {
        let span_m = self.prompt_f64("Enter beam span (m) [10.0]: ", "beam_length", 10.0)?;
        let n_loads = self.prompt_count("Number of point loads [1]: ", "n_forces", 1)?;

        let mut builder = LoadSet::builder(span_m);
        for i in 0..n_loads {
            let position_m = self.prompt_f64(
                &format!("  Load {} position (m) [{:.1}]: ", i + 1, span_m / 2.0),
                &format!("position_{i}"),
                span_m / 2.0,
            )?;
            let magnitude_kn = self.prompt_f64(
                &format!("  Load {} magnitude (kN, down +) [10.0]: ", i + 1),
                &format!("magnitude_{i}"),
                10.0,
            )?;
            builder = builder.point_load(position_m, magnitude_kn);
        }

        let intensity = self.prompt_f64("UDL intensity (kN/m) [0.0]: ", "udl_magnitude", 0.0)?;
        if intensity != 0.0 {
            let start_m = self.prompt_f64("UDL start (m) [0.0]: ", "udl_start", 0.0)?;
            let end_m = self.prompt_f64(&format!("UDL end (m) [{span_m:.1}]: "), "udl_end", span_m)?;
            builder = builder.udl(intensity, start_m, end_m);
        }

        builder.build()
    }
}
