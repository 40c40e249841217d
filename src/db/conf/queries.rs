use super::{blocking_queries, schema::Conf};
use crate::Result;
use deadpool_sqlite::Pool;

pub async fn select(pool: &Pool) -> Result<Conf> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select(conn))
        .await?
}

#[cfg(test)]
mod test {
    use crate::test::mock_state;
    use crate::Result;

    #[tokio::test]
    async fn select() -> Result<()> {
        let state = mock_state();
        assert_eq!(20, super::select(&state.pool).await?.top_users_limit);
        Ok(())
    }
}
