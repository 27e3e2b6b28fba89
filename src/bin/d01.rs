use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("calorie total overflowed")]
    Overflow,
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let input = opts.input(lib::input!("d01.txt"))?;
    let part = opts.part(Part::Two);

    let k = match part {
        Part::One => 1,
        Part::Two => 3,
    };

    let total = top_calories(input.istr(), k).map_err(|e| input.context(e))?;
    opts.answer(part, &total)
}

/// Sum the calories carried by the `k` elves carrying the most.
fn top_calories(input: IStr<'_>, k: usize) -> Result<u64> {
    let mut heap = MinHeap::new();

    for elf in input.blocks() {
        let mut calories = 0u64;

        for line in elf.lines() {
            let n = line.parse::<u32>()?;
            calories = calories
                .checked_add(u64::from(n))
                .ok_or_else(|| line.custom(Error::Overflow))?;
        }

        let calories = i64::try_from(calories).map_err(|_| elf.custom(Error::Overflow))?;
        heap.push(-calories);
    }

    log::debug!("{} elves", heap.len());

    let mut total = 0u64;

    for n in 0..k {
        let Some(negated) = heap.pop() else {
            bail!("{} element cannot be popped from the heap", ordinal(n + 1));
        };

        log::debug!("{}: {}", ordinal(n + 1), -negated);
        total += negated.unsigned_abs();
    }

    Ok(total)
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "first".to_owned(),
        2 => "second".to_owned(),
        3 => "third".to_owned(),
        n => format!("{n}th"),
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::top_calories;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_sample() {
        let input = IStr::new(SAMPLE, 0);
        assert_eq!(top_calories(input, 1).unwrap(), 24000);
        assert_eq!(top_calories(input, 3).unwrap(), 45000);
    }

    #[test]
    fn test_input() {
        let input = lib::input!("d01.txt");
        assert_eq!(top_calories(input.istr(), 1).unwrap(), 68923);
        assert_eq!(top_calories(input.istr(), 3).unwrap(), 200044);
    }

    #[test]
    fn test_too_few_elves() {
        let error = top_calories(IStr::new("1\n2\n\n3\n", 0), 3).unwrap_err();
        assert_eq!(
            error.to_string(),
            "third element cannot be popped from the heap"
        );
    }

    #[test]
    fn test_bad_number() {
        let input = Input::embedded("inputs/d01.txt", "100\n\n2x0\n");
        let error = top_calories(input.istr(), 1).unwrap_err();
        assert_eq!(input.context(error).to_string(), "inputs/d01.txt:3:0");
    }
}
