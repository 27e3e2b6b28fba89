use lib::prelude::*;
use thiserror::Error;

/// Capacity of the answer, one crate per stack.
const STACKS: usize = 32;

#[derive(Debug, Error)]
enum Error {
    #[error("missing stack labels")]
    MissingLabels,
    #[error("too many stacks, at most {STACKS} are supported")]
    TooManyStacks,
    #[error("expected stack label {expected}, but got {actual}")]
    BadLabel { expected: usize, actual: usize },
    #[error("crate in column {0} has no stack")]
    Unlabeled(usize),
    #[error("\"from\" {0} cannot equal \"to\" {0}")]
    SameStack(usize),
    #[error("no stack {0}")]
    NoStack(usize),
    #[error("cannot move {count} crates from stack {from} which only holds {len}")]
    NotEnoughCrates { count: usize, from: usize, len: usize },
}

/// How crates are moved between stacks.
#[derive(Debug, Clone, Copy)]
enum Crane {
    /// One crate at a time.
    Single,
    /// All crates in a move at once.
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let input = opts.input(lib::input!("d05.txt"))?;
    let part = opts.part(Part::One);

    let crane = match part {
        Part::One => Crane::Single,
        Part::Two => Crane::Multiple,
    };

    let top = run(input.istr(), crane).map_err(|e| input.context(e))?;
    opts.answer(part, top.as_str())
}

fn run(input: IStr<'_>, crane: Crane) -> Result<ArrayString<STACKS>> {
    let (diagram, moves) = input.cut("\n\n")?;
    let mut stacks = parse_stacks(diagram)?;
    let moves = parse_moves(moves, stacks.len())?;

    log::debug!("{} stacks, {} moves", stacks.len(), moves.len());

    apply_moves(&mut stacks, &moves, crane)?;

    for (n, stack) in stacks.iter().enumerate() {
        log::info!("{}: {}", n + 1, stack.as_bstr());
    }

    top_crates(&stacks)
}

/// Parse the stack diagram, returning the stacks bottom crate first.
fn parse_stacks(diagram: IStr<'_>) -> Result<Vec<Vec<u8>>> {
    let mut lines = diagram.lines().collect::<Vec<_>>();

    let Some(labels) = lines.pop() else {
        return Err(diagram.custom(Error::MissingLabels).into());
    };

    let mut words = labels;
    let mut count = 0;

    while let Some(label) = words.try_next::<usize>()? {
        count += 1;

        if label != count {
            let error = Error::BadLabel {
                expected: count,
                actual: label,
            };

            return Err(labels.custom(error).into());
        }
    }

    if count == 0 {
        return Err(labels.custom(Error::MissingLabels).into());
    }

    if count > STACKS {
        return Err(labels.custom(Error::TooManyStacks).into());
    }

    let mut stacks = vec![Vec::new(); count];

    for line in lines.iter().rev() {
        for (n, chunk) in line.as_bstr().chunks(4).enumerate() {
            let Some(&d) = chunk.get(1).filter(|d| d.is_ascii_alphabetic()) else {
                continue;
            };

            let stack = stacks
                .get_mut(n)
                .ok_or_else(|| line.custom(Error::Unlabeled(n + 1)))?;

            stack.push(d);
        }
    }

    Ok(stacks)
}

/// Parse `move N from A to B` lines, where `A` and `B` must name one of the
/// `stacks` available.
fn parse_moves(input: IStr<'_>, stacks: usize) -> Result<Vec<Move>> {
    let mut moves = Vec::new();

    for line in input.lines() {
        if line.as_str().trim().is_empty() {
            continue;
        }

        let mut words = line;
        words.expect("move")?;
        let count = words.next::<usize>()?;
        words.expect("from")?;
        let from = words.next::<usize>()?;
        words.expect("to")?;
        let to = words.next::<usize>()?;
        words.finish()?;

        if from == to {
            return Err(line.custom(Error::SameStack(from)).into());
        }

        for n in [from, to] {
            if n == 0 || n > stacks {
                return Err(line.custom(Error::NoStack(n)).into());
            }
        }

        moves.push(Move {
            count,
            from: from - 1,
            to: to - 1,
        });
    }

    Ok(moves)
}

fn apply_moves(stacks: &mut [Vec<u8>], moves: &[Move], crane: Crane) -> Result<()> {
    for (n, m) in moves.iter().enumerate() {
        let (from, to) = stacks.get_mut2(m.from, m.to).with_context(|| {
            format!("move #{}: bad stacks {} and {}", n + 1, m.from + 1, m.to + 1)
        })?;

        let Some(start) = from.len().checked_sub(m.count) else {
            let error = Error::NotEnoughCrates {
                count: m.count,
                from: m.from + 1,
                len: from.len(),
            };

            return Err(anyhow::Error::from(error).context(format!("move #{}", n + 1)));
        };

        match crane {
            Crane::Single => to.extend(from.drain(start..).rev()),
            Crane::Multiple => to.extend(from.drain(start..)),
        }
    }

    Ok(())
}

/// Collect the top crate of each stack, skipping empty stacks.
fn top_crates(stacks: &[Vec<u8>]) -> Result<ArrayString<STACKS>> {
    let mut top = ArrayString::<STACKS>::new();

    for d in stacks.iter().filter_map(|s| s.last()) {
        top.try_push(*d as char).context("answer capacity")?;
    }

    Ok(top)
}
