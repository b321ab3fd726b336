use crate::output::chapter_label;
use anyhow::Context;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tehillim_core::{
    content::ContentStore,
    error::TrackerError,
    store::ChapterStore,
    tracker::Tracker,
    types::Transition,
};

const HELP: &str = "\
commands:
  draw            draw a random available chapter
  redraw          draw a different chapter
  accept          take the drawn chapter
  select <n>      take chapter n
  view <n>        show a chapter you are reading
  close           stop showing the current chapter
  read            print the current chapter's text
  finish [n]      finish chapter n (default: the one being viewed)
  list            chapters in progress
  available       chapters that can still be selected
  status          progress statistics
  quit            leave the session";

/// Interactive loop over stdin. The preview and the viewed chapter live only
/// for the duration of the loop.
pub fn run(root: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let (config, tracker) = super::open_tracker(root)?;
    let content = super::open_content(root, &config);
    let mut rng = super::make_rng(seed);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session {
        tracker,
        content,
        rng: &mut rng,
    }
    .run(stdin.lock(), stdout.lock())
}

enum Flow {
    Continue,
    Quit,
}

struct Session<'r, S: ChapterStore, R: Rng> {
    tracker: Tracker<S>,
    content: ContentStore,
    rng: &'r mut R,
}

impl<S: ChapterStore, R: Rng> Session<'_, S, R> {
    fn run(mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        writeln!(out, "Tehillim together. Type 'help' for commands.")?;
        self.status(&mut out)?;
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let arg = words.next();
            match self.dispatch(command, arg, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "error: {e:#}")?,
            }
        }
        out.flush()?;
        Ok(())
    }

    fn dispatch(
        &mut self,
        command: &str,
        arg: Option<&str>,
        out: &mut impl Write,
    ) -> anyhow::Result<Flow> {
        match command {
            "draw" => self.draw(out, false)?,
            "redraw" => self.draw(out, true)?,
            "accept" => self.accept(out)?,
            "select" => {
                let id = parse_id(arg)?;
                match self.tracker.select(id)? {
                    Transition::Applied => {
                        writeln!(out, "Took {}", chapter_label(id))?;
                        self.read(out)?;
                    }
                    Transition::Ignored => writeln!(out, "Chapter {id} is already taken.")?,
                }
            }
            "view" => {
                let id = parse_id(arg)?;
                match self.tracker.view(id)? {
                    Transition::Applied => self.read(out)?,
                    Transition::Ignored => writeln!(out, "Chapter {id} is not in progress.")?,
                }
            }
            "close" => self.tracker.close_view(),
            "read" => self.read(out)?,
            "finish" => {
                let id = match arg {
                    Some(_) => parse_id(arg)?,
                    None => self
                        .tracker
                        .viewing()
                        .context("no chapter is being viewed; use 'finish <n>'")?,
                };
                match self.tracker.finish(id)? {
                    Transition::Applied => {
                        writeln!(out, "🎉 Finished {}!", chapter_label(id))?;
                    }
                    Transition::Ignored => writeln!(out, "Chapter {id} is not in progress.")?,
                }
            }
            "list" => self.list(out)?,
            "available" => self.available(out)?,
            "status" => self.status(out)?,
            "help" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => writeln!(out, "Unknown command '{other}'. Type 'help'.")?,
        }
        Ok(Flow::Continue)
    }

    fn draw(&mut self, out: &mut impl Write, again: bool) -> anyhow::Result<()> {
        let drawn = if again {
            self.tracker.redraw(&mut *self.rng)
        } else {
            self.tracker.draw(&mut *self.rng)
        };
        match drawn {
            Ok(id) => {
                writeln!(out, "Drew {}", chapter_label(id))?;
                writeln!(out, "Type 'accept' to take it or 'redraw' for another.")?;
            }
            Err(TrackerError::NoChaptersAvailable) => {
                writeln!(out, "All chapters have already been taken!")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn accept(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(id) = self.tracker.preview() else {
            writeln!(out, "Nothing drawn yet. Type 'draw' first.")?;
            return Ok(());
        };
        match self.tracker.accept_preview()? {
            Transition::Applied => {
                writeln!(out, "Took {}", chapter_label(id))?;
                self.read(out)?;
            }
            Transition::Ignored => writeln!(out, "Chapter {id} is no longer available.")?,
        }
        Ok(())
    }

    fn read(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(id) = self.tracker.viewing() else {
            writeln!(out, "No chapter is being viewed.")?;
            return Ok(());
        };
        writeln!(out, "\n{}\n", chapter_label(id))?;
        match self.content.lookup(id) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(_) => writeln!(out, "Error loading chapter text.")?,
        }
        writeln!(out)?;
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let reading = self.tracker.reading_list();
        if reading.is_empty() {
            writeln!(out, "No chapters taken yet.")?;
            return Ok(());
        }
        for chapter in reading {
            let marker = if self.tracker.viewing() == Some(chapter.id) {
                "*"
            } else {
                " "
            };
            writeln!(out, "{marker} {}", chapter_label(chapter.id))?;
        }
        Ok(())
    }

    fn available(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let open = self.tracker.selectable();
        if open.is_empty() {
            writeln!(out, "All chapters have already been taken!")?;
            return Ok(());
        }
        writeln!(out, "{} chapters available:", open.len())?;
        for row in open.chunks(10) {
            let ids: Vec<String> = row.iter().map(|c| c.id.to_string()).collect();
            writeln!(out, "  {}", ids.join(" "))?;
        }
        Ok(())
    }

    fn status(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let stats = self.tracker.stats();
        writeln!(
            out,
            "Reading: {}  Completed: {}  Left to draw: {}  Books completed: {}",
            stats.reading,
            stats.completed_label(),
            stats.available,
            stats.books_completed
        )?;
        Ok(())
    }
}

fn parse_id(arg: Option<&str>) -> anyhow::Result<u32> {
    let raw = arg.context("expected a chapter number")?;
    raw.parse()
        .with_context(|| format!("'{raw}' is not a chapter number"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
