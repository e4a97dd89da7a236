use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";

/// Classifies a failed statement. Nothing here ever yields a not-found
/// sentinel: those are decided by the caller from row counts and optional
/// fetches, so a foreign-key or unique violation stays an infrastructure
/// failure.
pub fn map_sqlx(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        let context = match &err {
            sqlx::Error::Database(db_err) => match db_err.constraint() {
                Some(CNT_ARTICLE_AUTHOR) => "article references an unknown author",
                _ => match db_err.code().as_deref() {
                    Some("23503") => "foreign key violation",
                    Some("23505") => "unique constraint violation",
                    Some("22P02") => "invalid input syntax",
                    _ => context,
                },
            },
            sqlx::Error::PoolTimedOut => "timed out acquiring a database connection",
            sqlx::Error::PoolClosed => "database pool is closed",
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "cannot decode row",
            _ => context,
        };

        tracing::debug!(error = %err, context, "storage failure");
        DomainError::infrastructure(context, err)
    }
}
