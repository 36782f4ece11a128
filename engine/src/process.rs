use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::Duration;

use evaluation::{RawScore, ScoreSource, SourceError};
use log::debug;

use crate::decoder::{Decoder, EngineOutput};
use crate::error::EngineError;

/// A running UCI engine, driven synchronously over piped stdio.
///
/// One request at a time: callers must not interleave score requests against
/// a single process. The session is released by `quit`, or by `Drop` as the
/// backstop on other exit paths.
pub struct EngineProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    decoder: Decoder,
    name: Option<String>,
    finished: bool,
}

impl EngineProcess {
    /// Spawn the engine at `path` and complete the `uci`/`isready` handshake.
    pub fn spawn(path: &Path) -> Result<Self, EngineError> {
        debug!("Spawning engine at {}", path.display());

        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(EngineError::Spawn)?;

        let stdin = child.stdin.take().ok_or(EngineError::MissingStdio)?;
        let stdout = child.stdout.take().ok_or(EngineError::MissingStdio)?;

        let mut process = Self {
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
            decoder: Decoder,
            name: None,
            finished: false,
        };

        process.send("uci")?;
        process.wait_for(|output| matches!(output, EngineOutput::UciOk))?;
        process.send("isready")?;
        process.wait_for(|output| matches!(output, EngineOutput::ReadyOk))?;

        Ok(process)
    }

    /// Engine name from the `id name` handshake line, if it sent one.
    pub fn engine_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Score `fen` at `depth`: the last `score` the engine reports before its
    /// `bestmove`, from the side-to-move perspective. `None` if the search
    /// finished without reporting any score.
    pub fn score(&mut self, fen: &str, depth: u8) -> Result<Option<RawScore>, EngineError> {
        self.send(&format!("position fen {}", fen))?;
        self.send(&format!("go depth {}", depth))?;

        let mut score = None;
        loop {
            let line = self.read_line()?;
            match self.decoder.decode(&line) {
                EngineOutput::Info { score: Some(s) } => score = Some(s),
                EngineOutput::BestMove(_) => break,
                _ => {}
            }
        }

        Ok(score)
    }

    /// Tear the session down, consuming the process.
    pub fn quit(mut self) -> Result<(), EngineError> {
        self.teardown()
    }

    fn send(&mut self, command: &str) -> Result<(), EngineError> {
        debug!("engine <- {}", command);
        writeln!(self.stdin, "{}", command)?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        let bytes = self.stdout.read_line(&mut line)?;
        if bytes == 0 {
            return Err(EngineError::UnexpectedEof);
        }

        let line = line.trim().to_string();
        debug!("engine -> {}", line);
        Ok(line)
    }

    fn wait_for<F>(&mut self, stop: F) -> Result<(), EngineError>
    where
        F: Fn(&EngineOutput) -> bool,
    {
        loop {
            let line = self.read_line()?;
            let output = self.decoder.decode(&line);

            if let EngineOutput::IdName(name) = &output {
                self.name = Some(name.clone());
            }

            if stop(&output) {
                return Ok(());
            }
        }
    }

    fn teardown(&mut self) -> Result<(), EngineError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        if self.send("quit").is_err() {
            // Can't reach the engine anymore, force kill the process.
            self.child.kill()?;
            self.child.wait()?;
            return Ok(());
        }

        // Give the engine a moment to quit gracefully.
        thread::sleep(Duration::from_millis(100));

        match self.child.try_wait()? {
            Some(_) => {}
            None => {
                self.child.kill()?;
                self.child.wait()?;
            }
        }

        Ok(())
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

impl ScoreSource for EngineProcess {
    fn name(&self) -> String {
        self.engine_name().unwrap_or("uci engine").to_string()
    }

    fn raw_score(&mut self, fen: &str, depth: u8) -> Result<Option<RawScore>, SourceError> {
        self.score(fen, depth).map_err(Into::into)
    }

    fn close(&mut self) -> Result<(), SourceError> {
        self.teardown().map_err(Into::into)
    }
}
