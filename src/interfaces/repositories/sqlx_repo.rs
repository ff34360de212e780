use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxStoreHealth {
    pub pool: PgPool,
}
