/**
 * Financial Report Query
 *
 * Apartments are left-joined to their owner and their financial record, so
 * every apartment of the building appears exactly once per record (or once
 * with zeroed amounts when it has none).
 */

use sqlx::PgPool;

use crate::backend::db::models::FinancialEntry;

/// Report lines for every apartment of a building, by apartment number
pub async fn financial_report(pool: &PgPool, building_id: i32) -> Result<Vec<FinancialEntry>, sqlx::Error> {
    sqlx::query_as::<_, FinancialEntry>(
        r#"
        SELECT a.number, a.floor, a.type AS apartment_type, a.residents, u.full_name,
               COALESCE(f.elevator_gtp, 0)::float8 AS elevator_gtp,
               COALESCE(f.elevator_electricity, 0)::float8 AS elevator_electricity,
               COALESCE(f.common_area_electricity, 0)::float8 AS common_area_electricity,
               COALESCE(f.elevator_maintenance, 0)::float8 AS elevator_maintenance,
               COALESCE(f.management_fee, 0)::float8 AS management_fee,
               COALESCE(f.repair_fund, 0)::float8 AS repair_fund,
               COALESCE(f.total_due, 0)::float8 AS total_due
        FROM apartments a
        LEFT JOIN users u ON a.user_id = u.id
        LEFT JOIN financial_records f ON a.id = f.apartment_id
        WHERE a.building_id = $1
        ORDER BY a.number, a.id
        "#,
    )
    .bind(building_id)
    .fetch_all(pool)
    .await
}
