//! Executes parsed commands against a [`Canvas`].

use super::{parse_command, Command};
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::Result;
use crate::logging::TimingGuard;
use std::path::{Path, PathBuf};

/// Runs command scripts, saving images into an output directory.
#[derive(Debug)]
pub struct Interpreter {
    canvas: Canvas,
    output_dir: PathBuf,
    extension: String,
}

impl Interpreter {
    /// Create an interpreter with the default configuration.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in defaults.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(&Config::default(), output_dir)
    }

    /// Create an interpreter whose initial canvas comes from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) if the configured canvas is empty.
    pub fn with_config(config: &Config, output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::from_config(config)?,
            output_dir: output_dir.into(),
            extension: config.output.extension.clone(),
        })
    }

    /// The canvas commands are applied to.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the canvas.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Directory `saveCanvas` writes into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path `saveCanvas <name>` writes to.
    #[must_use]
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.{}", self.extension))
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns whatever the canvas operation reports: invalid graphics,
    /// unknown ids, unsupported operations or output failures.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ResetCanvas { width, height } => self.canvas.reset(width, height),
            Command::SaveCanvas { name } => {
                let path = self.output_path(&name);
                self.canvas.save(path)
            }
            Command::SetColor(color) => {
                self.canvas.set_pen(color);
                Ok(())
            }
            Command::Draw { id, kind, algorithm, points } => {
                self.canvas.add(id, kind, algorithm, points)
            }
            Command::Translate { id, dx, dy } => self.canvas.translate(id, dx, dy),
            Command::Rotate { id, center, degrees } => self.canvas.rotate(id, center, degrees),
            Command::Scale { id, center, factor } => self.canvas.scale(id, center, factor),
            Command::Clip { id, algorithm, a, b } => self.canvas.clip(id, algorithm, a, b),
        }
    }

    /// Parse and apply one line; blank and comment lines do nothing.
    ///
    /// # Errors
    ///
    /// Returns the parse or execution error.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        match parse_command(line)? {
            Some(command) => self.execute(command),
            None => Ok(()),
        }
    }

    /// Run a whole script, stopping at the first failing line.
    ///
    /// Returns the number of commands executed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`](crate::Error::Command) for a line that does not parse and
    /// [`Error::Script`](crate::Error::Script) for one that fails to execute, both carrying the
    /// 1-based line number.
    pub fn run_script(&mut self, script: &str) -> Result<usize> {
        let _timing = TimingGuard::new("command", "run_script");
        let mut executed = 0;

        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            let Some(command) = parse_command(line).map_err(|e| e.at_line(line_no))? else {
                continue;
            };
            log::debug!(target: "command", "line {line_no}: {}", line.trim());
            self.execute(command).map_err(|e| e.at_line(line_no))?;
            executed += 1;
        }

        Ok(executed)
    }

    /// Read and run a script file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, otherwise as
    /// [`Interpreter::run_script`].
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let script = std::fs::read_to_string(path)?;
        self.run_script(&script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::error::Error;
    use crate::geometry::Point;

    fn interpreter() -> (tempfile::TempDir, Interpreter) {
        let dir = tempfile::tempdir().unwrap();
        let interp = Interpreter::new(dir.path()).unwrap();
        (dir, interp)
    }

    #[test]
    fn test_default_canvas() {
        let (_dir, interp) = interpreter();
        assert_eq!(interp.canvas().width(), 1000);
        assert_eq!(interp.canvas().height(), 1000);
        assert!(interp.output_path("a").ends_with("a.png"));
    }

    #[test]
    fn test_run_script_counts_commands() {
        let (_dir, mut interp) = interpreter();
        let script = "\
# setup
resetCanvas 50 40
setColor 255 0 0

drawLine 1 0 0 10 10 DDA
translate 1 5 0
";
        assert_eq!(interp.run_script(script).unwrap(), 4);
        assert_eq!(interp.canvas().pen(), Rgb::RED);
        assert_eq!(interp.canvas().width(), 50);
        assert_eq!(interp.canvas().get(1).unwrap().points()[0], Point::new(5, 0));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let (_dir, mut interp) = interpreter();
        let err = interp.run_script("resetCanvas 10 10\n\nfrobnicate\n").unwrap_err();
        assert!(matches!(err, Error::Command { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_execution_error_reports_line() {
        let (_dir, mut interp) = interpreter();
        let err = interp.run_script("resetCanvas 10 10\ntranslate 9 1 1\n").unwrap_err();
        match err {
            Error::Script { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, Error::UnknownGraphic(9)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_commands_before_failure_are_applied() {
        let (_dir, mut interp) = interpreter();
        let result = interp.run_script("setColor 0 255 0\nrotate 1 0 0 45\nsetColor 0 0 255\n");
        assert!(result.is_err());
        assert_eq!(interp.canvas().pen(), Rgb::GREEN);
    }

    #[test]
    fn test_save_canvas_writes_png() {
        let (dir, mut interp) = interpreter();
        interp
            .run_script("resetCanvas 16 16\nsetColor 255 255 255\ndrawRectangle 0 2 2 12 12 Bresenham\nsaveCanvas out\n")
            .unwrap();
        assert!(dir.path().join("out.png").is_file());
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.extension = "image.png".into();
        let interp = Interpreter::with_config(&config, dir.path()).unwrap();
        assert_eq!(interp.output_path("7"), dir.path().join("7.image.png"));
        assert_eq!(interp.output_dir(), dir.path());
    }
}
