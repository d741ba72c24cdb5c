mod employee;

use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};
use platform_api::{ApiError, ApiResult, graphql_result};
use products_hr::{EditError, Employee, EmployeeField, FieldError, FieldKind, HrModule, RosterError};
use serde::Serialize;
use tracing::{debug, instrument};

use employee::{EmployeeInput, EmployeeNode, FieldNode};

pub type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Shared state handed to every resolver.
#[derive(Clone, Debug, Default)]
pub struct GraphqlData {
    pub hr: HrModule,
}

pub fn build_schema(data: GraphqlData) -> SchemaType {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data)
        .finish()
}

fn hr<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a HrModule> {
    Ok(&ctx.data::<GraphqlData>()?.hr)
}

fn roster_error(err: RosterError) -> ApiError {
    match err {
        RosterError::NotFound { id } => ApiError::not_found(format!("employee {id}")),
        RosterError::DuplicateId { .. } => ApiError::invalid_input(err),
    }
}

fn edit_field(hr: &HrModule, id: u32, key: &str, value: &str) -> ApiResult<Employee> {
    let field = EmployeeField::from_key(key)
        .ok_or_else(|| ApiError::invalid_input(format!("unknown employee field {key:?}")))?;
    if field.kind() == FieldKind::Text && value.trim().is_empty() {
        return Err(ApiError::invalid_input(FieldError::Missing { field }));
    }
    hr.edit_field(id, field, value).map_err(|err| match err {
        EditError::Roster(err) => roster_error(err),
        EditError::Field(err) => ApiError::invalid_input(err),
    })
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.health", skip_all)]
    async fn health(&self) -> ApiResult<HealthPayload> {
        Ok(HealthPayload { ok: true })
    }

    #[instrument(name = "graphql.version", skip_all)]
    async fn version(&self) -> ApiResult<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    async fn hr(&self) -> HrQuery {
        HrQuery
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn hr(&self) -> HrMutation {
        HrMutation
    }
}

#[derive(Default)]
pub struct HrQuery;

#[Object]
impl HrQuery {
    /// Employees whose name contains `filter`, ignoring case. Without a
    /// filter argument the stored search term applies.
    #[instrument(name = "graphql.hr.employees", skip_all, fields(has_filter = filter.is_some()))]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        filter: Option<String>,
    ) -> async_graphql::Result<Vec<EmployeeNode>> {
        let hr = hr(ctx)?;
        let records = match filter {
            Some(filter) => hr.query(&filter),
            None => hr.visible(),
        };
        Ok(records.into_iter().map(EmployeeNode::from).collect())
    }

    #[instrument(name = "graphql.hr.employee", skip_all, fields(id = id))]
    async fn employee(
        &self,
        ctx: &Context<'_>,
        id: u32,
    ) -> async_graphql::Result<Option<EmployeeNode>> {
        Ok(hr(ctx)?.get(id).map(EmployeeNode::from))
    }

    async fn filter(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        Ok(hr(ctx)?.filter())
    }

    /// Editable fields in form order.
    async fn fields(&self) -> Vec<FieldNode> {
        EmployeeField::EDITABLE
            .into_iter()
            .map(FieldNode::from)
            .collect()
    }
}

#[derive(Default)]
pub struct HrMutation;

#[Object]
impl HrMutation {
    #[graphql(name = "insertEmployee")]
    #[instrument(name = "graphql.hr.insert", skip_all)]
    async fn insert_employee(
        &self,
        ctx: &Context<'_>,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeeNode> {
        let hr = hr(ctx)?;
        let draft = graphql_result(input.into_draft())?;
        let employee = hr.insert(draft);
        debug!(id = employee.id, "employee inserted");
        Ok(employee.into())
    }

    #[graphql(name = "updateEmployee")]
    #[instrument(name = "graphql.hr.update", skip_all, fields(id = id))]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: u32,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeeNode> {
        let hr = hr(ctx)?;
        if let Some(payload_id) = input.id.filter(|payload_id| *payload_id != id) {
            debug!(payload_id, "ignoring id inside employee input");
        }
        let draft = graphql_result(input.into_draft())?;
        let employee = graphql_result(hr.update(id, draft).map_err(roster_error))?;
        Ok(employee.into())
    }

    /// Applies one form edit: `value` is parsed according to the field's kind.
    #[graphql(name = "editEmployeeField")]
    #[instrument(name = "graphql.hr.edit_field", skip_all, fields(id = id, field = %field))]
    async fn edit_employee_field(
        &self,
        ctx: &Context<'_>,
        id: u32,
        field: String,
        value: String,
    ) -> async_graphql::Result<EmployeeNode> {
        let employee = graphql_result(edit_field(hr(ctx)?, id, &field, &value))?;
        Ok(employee.into())
    }

    #[graphql(name = "deleteEmployee")]
    #[instrument(name = "graphql.hr.delete", skip_all, fields(id = id))]
    async fn delete_employee(&self, ctx: &Context<'_>, id: u32) -> async_graphql::Result<bool> {
        let removed = hr(ctx)?.delete(id);
        debug!(removed, "employee delete handled");
        Ok(removed)
    }

    #[graphql(name = "setFilter")]
    async fn set_filter(&self, ctx: &Context<'_>, text: String) -> async_graphql::Result<String> {
        let hr = hr(ctx)?;
        hr.set_filter(text);
        Ok(hr.filter())
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct HealthPayload {
    pub ok: bool,
}
