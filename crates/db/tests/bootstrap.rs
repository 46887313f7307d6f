use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    transit_db::health_check(&pool).await.unwrap();

    let columns: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT column_name::text, data_type::text, is_nullable::text
         FROM information_schema.columns
         WHERE table_name = 'patients'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        ("id", "bigint", "NO"),
        ("name", "text", "NO"),
        ("birthdate", "date", "NO"),
        ("patient_number", "text", "NO"),
        ("special_notes", "text", "YES"),
        ("created_at", "timestamp with time zone", "NO"),
    ];
    assert_eq!(columns.len(), expected.len());
    for ((name, ty, nullable), (exp_name, exp_ty, exp_nullable)) in columns.iter().zip(expected) {
        assert_eq!(name, exp_name);
        assert_eq!(ty, exp_ty, "type of {name}");
        assert_eq!(nullable, exp_nullable, "nullability of {name}");
    }
}

/// patient_number carries no unique constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patient_number_is_not_unique(pool: PgPool) {
    let unique_constraints: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pg_indexes
         WHERE tablename = 'patients' AND indexdef ILIKE '%UNIQUE%patient_number%'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(unique_constraints.0, 0);
}
