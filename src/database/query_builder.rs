use crate::models::SearchFilters;
use sqlx::{QueryBuilder, Sqlite};

/// 动态查询构建器
///
/// 检索走两条路径：仅按标题检索时直接查 contents 表；一旦启用任何
/// 分类筛选（或根本没有检索词），则通过 category 表联合查询，只返回
/// 已归类的内容。
pub struct ActivityQueryBuilder {
    query: QueryBuilder<'static, Sqlite>,
    has_where: bool,
}

impl ActivityQueryBuilder {
    /// 结果查询：过滤条件 + 排序 + 分页
    pub fn select(filters: &SearchFilters) -> QueryBuilder<'static, Sqlite> {
        let mut builder = Self::filtered("c.*", filters);
        builder
            .query
            .push(format!(" ORDER BY c.{} DESC", filters.sort.column()));
        builder.query.push(" LIMIT ");
        builder.query.push_bind(filters.limit);
        builder.query.push(" OFFSET ");
        builder.query.push_bind(filters.offset);
        builder.query
    }

    /// 计数查询：与结果查询完全相同的过滤条件
    pub fn count(filters: &SearchFilters) -> QueryBuilder<'static, Sqlite> {
        Self::filtered("COUNT(*)", filters).query
    }

    fn filtered(projection: &str, filters: &SearchFilters) -> Self {
        let base = if filters.is_title_only() {
            format!("SELECT {} FROM contents c", projection)
        } else {
            format!(
                "SELECT {} FROM contents c JOIN category g ON c.ID = g.ID",
                projection
            )
        };

        let mut builder = Self {
            query: QueryBuilder::new(base),
            has_where: false,
        };

        // 标题检索
        if let Some(ref q) = filters.query {
            builder.add_where_clause();
            builder.query.push("c.title LIKE ");
            builder.query.push_bind(format!("%{}%", q));
            builder.query.push(" COLLATE NOCASE");
        }

        // 分类筛选
        if let Some(ref category) = filters.category {
            builder.add_where_clause();
            builder.query.push("g.category_title = ");
            builder.query.push_bind(category.clone());
        }

        // 人数筛选
        if let Some(ref players) = filters.players {
            builder.add_where_clause();
            builder.query.push("g.players = ");
            builder.query.push_bind(players.clone());
        }

        // 难度筛选
        if let Some(ref level) = filters.level {
            builder.add_where_clause();
            builder.query.push("g.level = ");
            builder.query.push_bind(level.clone());
        }

        // 频道筛选
        if let Some(channel) = filters.channel {
            builder.add_where_clause();
            builder.query.push("g.channel_brand_category = ");
            builder.query.push_bind(channel);
        }

        builder
    }

    fn add_where_clause(&mut self) {
        if !self.has_where {
            self.query.push(" WHERE ");
            self.has_where = true;
        } else {
            self.query.push(" AND ");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    fn base_filters() -> SearchFilters {
        SearchFilters {
            limit: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_only_skips_category_join() {
        let filters = SearchFilters {
            query: Some("パス".to_string()),
            ..base_filters()
        };
        let mut query = ActivityQueryBuilder::select(&filters);
        assert!(!query.sql().contains("JOIN category"));
        assert!(query.sql().contains("c.title LIKE"));
    }

    #[test]
    fn test_filters_use_category_join() {
        let filters = SearchFilters {
            query: Some("パス".to_string()),
            players: Some("2対2".to_string()),
            ..base_filters()
        };
        let mut query = ActivityQueryBuilder::select(&filters);
        assert!(query.sql().contains("JOIN category"));
        assert!(query.sql().contains("g.players ="));
    }

    #[test]
    fn test_empty_search_still_joins() {
        // 无检索词也要经过 category 表，与未归类内容隔离
        let mut query = ActivityQueryBuilder::select(&base_filters());
        assert!(query.sql().contains("JOIN category"));
    }

    #[test]
    fn test_sort_column_is_whitelisted() {
        let filters = SearchFilters {
            sort: SortKey::parse("view_count"),
            ..base_filters()
        };
        let mut query = ActivityQueryBuilder::select(&filters);
        assert!(query.sql().contains("ORDER BY c.view_count DESC"));

        let filters = SearchFilters {
            sort: SortKey::parse("'; DROP TABLE contents; --"),
            ..base_filters()
        };
        let mut query = ActivityQueryBuilder::select(&filters);
        assert!(query.sql().contains("ORDER BY c.upload_date DESC"));
    }

    #[test]
    fn test_count_has_no_pagination() {
        let filters = SearchFilters {
            level: Some("初級".to_string()),
            ..base_filters()
        };
        let mut query = ActivityQueryBuilder::count(&filters);
        assert!(query.sql().starts_with("SELECT COUNT(*)"));
        assert!(!query.sql().contains("LIMIT"));
        assert!(query.sql().contains("g.level ="));
    }
}
