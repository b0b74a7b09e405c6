use sea_orm::sea_query::LikeExpr;

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching any value that contains `needle` literally.
///
/// `%`, `_` and the escape character itself are escaped, so user input never acts as a
/// wildcard.
pub fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}
