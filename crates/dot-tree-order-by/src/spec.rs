/// Sort direction of one order-by clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// One `field [ASC|DESC]` clause of an order-by specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub field: String,
    pub direction: Direction,
}

/// Parse an order-by specification into its clauses.
///
/// The specification is split on `,`; each clause is split on whitespace into
/// a field name and an optional direction token. The direction token is
/// matched case-insensitively, and anything other than `desc` (including a
/// missing token) is ascending. Parsing never fails.
///
/// # Example
///
/// ```
/// use dot_tree_order_by::{parse_order_by, Direction};
///
/// let clauses = parse_order_by("position ASC, title desc");
/// assert_eq!(clauses[0].field, "position");
/// assert_eq!(clauses[0].direction, Direction::Asc);
/// assert_eq!(clauses[1].field, "title");
/// assert_eq!(clauses[1].direction, Direction::Desc);
/// ```
pub fn parse_order_by(spec: &str) -> Vec<OrderClause> {
    spec.split(',')
        .map(|clause| {
            let mut parts = clause.split_whitespace();
            let field = parts.next().unwrap_or("").to_string();
            let direction = match parts.next() {
                Some(token) if token.eq_ignore_ascii_case("desc") => Direction::Desc,
                _ => Direction::Asc,
            };
            OrderClause { field, direction }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(field: &str, direction: Direction) -> OrderClause {
        OrderClause {
            field: field.to_string(),
            direction,
        }
    }

    #[test]
    fn test_parse_single_field_defaults_to_asc() {
        assert_eq!(parse_order_by("title"), vec![clause("title", Direction::Asc)]);
    }

    #[test]
    fn test_parse_explicit_directions() {
        assert_eq!(
            parse_order_by("position ASC, title DESC"),
            vec![
                clause("position", Direction::Asc),
                clause("title", Direction::Desc),
            ]
        );
    }

    #[test]
    fn test_parse_direction_is_case_insensitive() {
        assert_eq!(
            parse_order_by("a Desc, b dEsC, c asc"),
            vec![
                clause("a", Direction::Desc),
                clause("b", Direction::Desc),
                clause("c", Direction::Asc),
            ]
        );
    }

    #[test]
    fn test_parse_unknown_direction_falls_back_to_asc() {
        assert_eq!(
            parse_order_by("a DOWNWARDS, b descending"),
            vec![clause("a", Direction::Asc), clause("b", Direction::Asc)]
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse_order_by("  a   desc ,   b  "),
            vec![clause("a", Direction::Desc), clause("b", Direction::Asc)]
        );
    }

    #[test]
    fn test_parse_empty_spec_yields_empty_field() {
        assert_eq!(parse_order_by(""), vec![clause("", Direction::Asc)]);
    }
}
