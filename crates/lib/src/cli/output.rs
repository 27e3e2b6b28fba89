use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Part;

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn answer<T>(&mut self, part: Part, value: &T) -> io::Result<()>
    where
        T: ?Sized + fmt::Display + Serialize,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Answer { part, value },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{value}")?;
            }
        }

        self.out.flush()
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
}

#[derive(Serialize)]
struct Answer<'a, T>
where
    T: ?Sized,
{
    part: Part,
    value: &'a T,
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind};
    use crate::cli::Part;

    #[test]
    fn test_normal() {
        let mut out = Output::new(Vec::new(), OutputKind::Normal);
        out.answer(Part::Two, &200044u64).unwrap();
        assert_eq!(out.out, b"200044\n");
    }

    #[test]
    fn test_json() {
        let mut out = Output::new(Vec::new(), OutputKind::Json);
        out.answer(Part::One, "CMZ").unwrap();
        assert_eq!(
            String::from_utf8(out.out).unwrap(),
            "{\"type\":\"answer\",\"data\":{\"part\":1,\"value\":\"CMZ\"}}\n"
        );
    }
}
