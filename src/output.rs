use std::io::{self, Write};

use clap::ValueEnum;

use crate::list::List;

/// How traversed values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One decimal value per line
    #[default]
    Lines,
    /// A single JSON array
    Json,
}

/// Traverse `list` and write every value to `out` in `format`.
pub fn write_values<W: Write>(list: &List, mut out: W, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for value in list {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, list)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::allocator::SystemAllocator;

    fn render(list: &List, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_values(list, &mut buf, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lines_are_decimal_per_line() {
        let list = List::from_values(&[1, -20, 300], &mut SystemAllocator).unwrap();
        assert_eq!(render(&list, OutputFormat::Lines), "1\n-20\n300\n");
    }

    #[test]
    fn json_is_one_array() {
        let list = List::sample(&mut SystemAllocator).unwrap();
        assert_eq!(render(&list, OutputFormat::Json), "[1,2]\n");
    }

    #[test]
    fn empty_list_writes_nothing_in_lines() {
        assert_eq!(render(&List::new(), OutputFormat::Lines), "");
        assert_eq!(render(&List::new(), OutputFormat::Json), "[]\n");
    }
}
