//! Stub templates written into a freshly scaffolded day directory.
use serde::Deserialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::day::DayNumber;
use crate::day_paths::day_dir_name;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ts,
    Py,
    Rs,
}

const TS_STUB: &str = "export const part_1 = (input: string): number => {
  // TODO: Implement part 1
  return 0;
}

export const part_2 = (input: string): number => {
  // TODO: Implement part 2
  return 0;
}
";

const RS_STUB: &str = "pub fn part_one(input: &str) -> u64 {
    // TODO: Implement part 1
    let _ = input;
    0
}

pub fn part_two(input: &str) -> u64 {
    // TODO: Implement part 2
    let _ = input;
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(0, part_one(\"\"));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(0, part_two(\"\"));
    }
}
";

impl Language {
    /// File name of the stub inside the day directory.
    pub fn stub_file_name(self, day: DayNumber) -> String {
        match self {
            Language::Ts => "index.ts".to_string(),
            Language::Py => format!("{}.py", day_dir_name(day)),
            Language::Rs => "mod.rs".to_string(),
        }
    }

    /// Stub content. Only the Python stub depends on the day.
    pub fn stub_content(self, day: DayNumber) -> String {
        match self {
            Language::Ts => TS_STUB.to_string(),
            Language::Py => python_stub(day),
            Language::Rs => RS_STUB.to_string(),
        }
    }
}

fn python_stub(day: DayNumber) -> String {
    let name = day_dir_name(day);
    format!(
        r#"def part_one(data):
    # TODO: Implement part 1
    return 0


def part_two(data):
    # TODO: Implement part 2
    return 0


def parse_input(filename: str):
    with open(filename) as f:
        return f.read().strip()


def main():
    data = parse_input("input.txt")
    print(f"[{name}] Result part 1: {{part_one(data)}}")
    print(f"[{name}] Result part 2: {{part_two(data)}}")


if __name__ == "__main__":
    main()
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayRange;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn day(n: u8) -> DayNumber {
        DayNumber::new(n, DayRange::default()).unwrap()
    }

    #[test]
    fn typescript_stub_is_fixed_for_every_day() {
        let expected = "export const part_1 = (input: string): number => {\n  // TODO: Implement part 1\n  return 0;\n}\n\nexport const part_2 = (input: string): number => {\n  // TODO: Implement part 2\n  return 0;\n}\n";
        assert_eq!(Language::Ts.stub_content(day(1)), expected);
        assert_eq!(Language::Ts.stub_content(day(25)), expected);
        assert_eq!(Language::Ts.stub_file_name(day(3)), "index.ts");
    }

    #[test]
    fn python_stub_is_named_after_the_day() {
        assert_eq!(Language::Py.stub_file_name(day(4)), "day_04.py");
        let s = Language::Py.stub_content(day(4));
        assert!(s.contains("def part_one(data):"));
        assert!(s.contains("def part_two(data):"));
        assert!(s.contains("[day_04] Result part 1: {part_one(data)}"));
    }

    #[test]
    fn every_stub_has_both_parts() {
        for lang in Language::iter() {
            let s = lang.stub_content(day(9));
            assert!(s.contains("Implement part 1"), "{}", lang.as_ref());
            assert!(s.contains("Implement part 2"), "{}", lang.as_ref());
        }
    }

    #[test]
    fn parses_language_names() {
        assert_eq!(Language::from_str("ts").unwrap(), Language::Ts);
        assert_eq!(Language::from_str("PY").unwrap(), Language::Py);
        assert_eq!(Language::Rs.as_ref(), "rs");
        assert!(Language::from_str("go").is_err());
    }
}
