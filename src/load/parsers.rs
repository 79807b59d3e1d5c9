//! Line parsers for the graph file format

/// A person line: `name|y|school` for students, `name|n` otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PersonLine {
    pub name: String,
    pub school: Option<String>,
}

/// A friendship line: `name1|name2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FriendshipLine {
    pub a: String,
    pub b: String,
}

pub(super) fn parse_count_line(line: &str) -> Result<usize, String> {
    line.trim()
        .parse()
        .map_err(|_| format!("expected number of people, found '{}'", line.trim()))
}

pub(super) fn parse_person_line(
    line: &str,
    normalize: impl Fn(&str) -> String,
) -> Result<PersonLine, String> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() > 3 {
        return Err(format!("expected at most 3 fields, found '{}'", line.trim()));
    }
    let name = parts
        .first()
        .map(|&n| normalize(n))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| "missing person name".to_string())?;

    let school = match parts.get(1).map(|flag| flag.trim()) {
        Some("y") | Some("Y") => {
            let school = parts
                .get(2)
                .map(|&s| normalize(s))
                .filter(|s| !s.is_empty())
                .ok_or_else(|| format!("student '{}' has no school", name))?;
            Some(school)
        }
        Some("n") | Some("N") => match parts.get(2).map(|s| s.trim()) {
            None | Some("") => None,
            Some(school) => {
                return Err(format!(
                    "non-student '{}' has a school '{}'",
                    name, school
                ))
            }
        },
        Some(other) => {
            return Err(format!(
                "invalid student flag '{}' for '{}' (expected y or n)",
                other, name
            ))
        }
        None => return Err(format!("missing student flag for '{}'", name)),
    };

    Ok(PersonLine { name, school })
}

pub(super) fn parse_friendship_line(
    line: &str,
    normalize: impl Fn(&str) -> String,
) -> Result<FriendshipLine, String> {
    match line.split('|').collect::<Vec<_>>().as_slice() {
        [a, b] => {
            let (a, b) = (normalize(*a), normalize(*b));
            if a.is_empty() || b.is_empty() {
                Err("friendship has an empty name".to_string())
            } else {
                Ok(FriendshipLine { a, b })
            }
        }
        _ => Err(format!("expected 'name1|name2', found '{}'", line.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(s: &str) -> String {
        s.trim().to_lowercase()
    }

    #[test]
    fn test_parse_count_line() {
        assert_eq!(parse_count_line(" 15 "), Ok(15));
        assert!(parse_count_line("fifteen").is_err());
    }

    #[test]
    fn test_parse_student() {
        let person = parse_person_line("Sam|y|Rutgers", lower).unwrap();
        assert_eq!(person.name, "sam");
        assert_eq!(person.school.as_deref(), Some("rutgers"));
    }

    #[test]
    fn test_parse_non_student() {
        let person = parse_person_line("tom|n", lower).unwrap();
        assert_eq!(person.school, None);

        // trailing separator left by some exporters
        let person = parse_person_line("tom|n|", lower).unwrap();
        assert_eq!(person.school, None);
    }

    #[test]
    fn test_parse_student_without_school() {
        let err = parse_person_line("sam|y", lower).unwrap_err();
        assert!(err.contains("has no school"));
        assert!(parse_person_line("sam|y|  ", lower).is_err());
    }

    #[test]
    fn test_parse_bad_flag() {
        let err = parse_person_line("sam|maybe|rutgers", lower).unwrap_err();
        assert!(err.contains("invalid student flag"));
        assert!(parse_person_line("sam", lower).is_err());
        assert!(parse_person_line("|n", lower).is_err());
    }

    #[test]
    fn test_parse_extra_fields() {
        let err = parse_person_line("sam|n|rutgers", lower).unwrap_err();
        assert!(err.contains("non-student 'sam' has a school"));

        let err = parse_person_line("sam|y|rut|gers", lower).unwrap_err();
        assert!(err.contains("at most 3 fields"));
        assert!(parse_person_line("tom|n||", lower).is_err());
    }

    #[test]
    fn test_parse_friendship() {
        let edge = parse_friendship_line("Sam|Jane", lower).unwrap();
        assert_eq!(
            edge,
            FriendshipLine {
                a: "sam".into(),
                b: "jane".into()
            }
        );
    }

    #[test]
    fn test_parse_bad_friendship() {
        assert!(parse_friendship_line("sam", lower).is_err());
        assert!(parse_friendship_line("sam|jane|bob", lower).is_err());
        assert!(parse_friendship_line("sam|", lower).is_err());
    }

    #[test]
    fn test_parse_without_normalization() {
        let person = parse_person_line("Sam|y|Rutgers", str::to_string).unwrap();
        assert_eq!(person.name, "Sam");
        assert_eq!(person.school.as_deref(), Some("Rutgers"));
    }
}
