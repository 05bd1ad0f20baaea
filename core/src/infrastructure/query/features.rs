//! Staged translation of raw query-string parameters into a sea-orm
//! select. One instance wraps one unexecuted query handle per request;
//! the stages run once each, in pipeline order
//! filter -> sort -> limit_fields -> paginate -> search.

use sea_orm::sea_query::{Alias, Condition, Expr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, IdenStatic, Iterable, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};

use crate::domain::query::value_objects::{
    FilterOperator, PageSpec, RawQuery, SortDirection, SortSpec, parse_field_list,
    parse_filter_key,
};

/// Column holding internal row metadata, hidden unless explicitly selected.
const VERSION_FIELD: &str = "revision";

/// Default sort key when the caller supplies none.
const CREATED_AT_FIELD: &str = "created_at";

/// Identity column, always part of an explicit projection.
const ID_FIELD: &str = "id";

pub struct ApiFeatures<E: EntityTrait> {
    query: Select<E>,
    count_query: Select<E>,
    params: RawQuery,
    page: PageSpec,
}

impl<E: EntityTrait> ApiFeatures<E> {
    /// Wraps an unexecuted query handle. No validation happens here;
    /// malformed values are normalized lazily inside each stage.
    pub fn new(query: Select<E>, params: RawQuery) -> Self {
        let page = PageSpec::from_params(&params);
        Self {
            count_query: query.clone(),
            query,
            params,
            page,
        }
    }

    /// Applies every non-reserved parameter as an equality or range
    /// condition. Field names are taken verbatim; an unknown column only
    /// fails once the caller executes the query.
    pub fn filter(mut self) -> Self {
        let mut condition = Condition::all();
        for (key, value) in self.params.filter_entries() {
            let (field, operator) = parse_filter_key(key);
            let column = Expr::col(Alias::new(field));
            let value = coerce_value(value);
            let expr = match operator {
                FilterOperator::Eq => column.eq(value),
                FilterOperator::Gte => column.gte(value),
                FilterOperator::Gt => column.gt(value),
                FilterOperator::Lte => column.lte(value),
                FilterOperator::Lt => column.lt(value),
            };
            condition = condition.add(expr);
        }

        if !condition.is_empty() {
            self.query = self.query.filter(condition.clone());
            self.count_query = self.count_query.filter(condition);
        }
        self
    }

    /// Comma-separated sort keys, `-` prefix for descending; listed order
    /// is tie-break priority. Defaults to ascending creation time.
    pub fn sort(mut self) -> Self {
        match self.params.get("sort") {
            Some(raw) => {
                for spec in SortSpec::parse_list(raw) {
                    let order = match spec.direction {
                        SortDirection::Asc => Order::Asc,
                        SortDirection::Desc => Order::Desc,
                    };
                    let expr: SimpleExpr = Expr::col(Alias::new(spec.field.as_str())).into();
                    self.query = self.query.order_by(expr, order);
                }
            }
            None => {
                let expr: SimpleExpr = Expr::col(Alias::new(CREATED_AT_FIELD)).into();
                self.query = self.query.order_by(expr, Order::Asc);
            }
        }
        self
    }

    /// Explicit include-list projection; without a `fields` parameter,
    /// every column except the internal version metadata is selected.
    pub fn limit_fields(mut self) -> Self {
        self.query = QuerySelect::select_only(self.query);
        match self.params.get("fields") {
            Some(raw) => {
                let fields = parse_field_list(raw);
                if !fields.contains(&ID_FIELD) {
                    self.query = self.query.expr_as(Expr::col(Alias::new(ID_FIELD)), ID_FIELD);
                }
                for field in fields {
                    self.query = self.query.expr_as(Expr::col(Alias::new(field)), field);
                }
            }
            None => {
                for column in E::Column::iter() {
                    if column.as_str() != VERSION_FIELD {
                        self.query = self.query.column(column);
                    }
                }
            }
        }
        self
    }

    /// Applies `skip = (page-1) * limit` with the documented fallbacks.
    pub fn paginate(mut self) -> Self {
        self.query = self.query.offset(self.page.skip()).limit(self.page.limit);
        self
    }

    /// Case-insensitive substring match OR-ed across `fields`, composed
    /// with the filter stage rather than replacing it. A no-op when the
    /// `search` parameter is absent.
    pub fn search(mut self, fields: &[&str]) -> Self {
        if let Some(term) = self.params.get("search") {
            let pattern = format!("%{}%", escape_like(term));
            let mut any = Condition::any();
            for field in fields {
                any = any.add(Expr::col(Alias::new(*field)).ilike(pattern.as_str()));
            }
            self.query = self.query.filter(any.clone());
            self.count_query = self.count_query.filter(any);
        }
        self
    }

    /// Executes a duplicate of the staged query, ignoring offset, limit
    /// and projection, and returns the total matching-row count. The
    /// original query handle is left untouched.
    pub async fn count<C>(&self, db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        E::Model: FromQueryResult + Sized + Send + Sync,
    {
        self.count_query.clone().count(db).await
    }

    /// True when the caller explicitly asked for a page, which obliges the
    /// caller to reject out-of-range requests.
    pub fn page_was_requested(&self) -> bool {
        self.params.contains("page")
    }

    pub fn skip(&self) -> u64 {
        self.page.skip()
    }

    /// Hands the staged query back for execution.
    pub fn into_inner(self) -> Select<E> {
        self.query
    }
}

/// Query-string values are untyped text; compare numerics and booleans as
/// such so range filters behave, and leave everything else a string. A
/// value the column cannot hold fails at execution, like any other cast
/// error.
fn coerce_value(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return int.into();
    }
    if let Ok(float) = raw.parse::<f64>() {
        return float.into();
    }
    match raw {
        "true" => true.into(),
        "false" => false.into(),
        _ => raw.into(),
    }
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
