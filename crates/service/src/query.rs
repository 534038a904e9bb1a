//! Predicate helpers shared by the criteria-search endpoints.
//!
//! Search criteria arrive as structs of optional fields; each service maps
//! its struct to a conjunctive `Condition` with these helpers. String
//! matching is case-insensitive.

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};

/// Case-insensitive substring containment.
pub fn contains_ci(col: impl IntoColumnRef, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}

/// Case-insensitive equality.
pub fn eq_ci(col: impl IntoColumnRef, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).eq(value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::artisan;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn contains_ci_lowers_both_sides() {
        let sql = artisan::Entity::find()
            .filter(contains_ci(artisan::Column::Address, "Srinagar"))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("address") LIKE '%srinagar%'"#), "{sql}");
    }

    #[test]
    fn eq_ci_lowers_both_sides() {
        let sql = artisan::Entity::find()
            .filter(eq_ci(artisan::Column::FirstName, "Amin"))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("first_name") = 'amin'"#), "{sql}");
    }
}
