//! Machine-readable description of the HTTP surface, served at
//! `/api-docs/openapi.json` and printable with `openapi:print`.

use serde_json::{Value, json};

pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Employee API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "In-memory employee records with create, read, update, delete and filter operations."
        },
        "paths": {
            "/employees": employee_collection(),
            "/employees/filter": employee_filter(),
            "/employees/{id}": employee_item(),
            "/health": health()
        },
        "components": { "schemas": schemas() }
    })
}

fn employee_collection() -> Value {
    json!({
        "get": {
            "summary": "List all employees",
            "responses": { "200": list_response("Employees in insertion order") }
        },
        "post": {
            "summary": "Create an employee",
            "requestBody": json_body("CreateEmployee"),
            "responses": {
                "201": record_response("Employee created"),
                "400": failure_response("Missing id/name or duplicate id")
            }
        }
    })
}

fn employee_filter() -> Value {
    json!({
        "get": {
            "summary": "Filter employees by minimum salary and joining year",
            "parameters": [
                query_param("salary", "Minimum salary, inclusive. Ignored unless a number greater than 0."),
                query_param("year", "Exact joining year. Ignored unless a number greater than 1900.")
            ],
            "responses": { "200": list_response("Matching employees") }
        }
    })
}

fn employee_item() -> Value {
    json!({
        "parameters": [{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "minimum": 1 }
        }],
        "get": {
            "summary": "Get an employee by id",
            "responses": {
                "200": record_response("Employee found"),
                "404": failure_response("Employee not found")
            }
        },
        "put": {
            "summary": "Partially update an employee",
            "requestBody": json_body("UpdateEmployee"),
            "responses": {
                "200": record_response("Employee updated"),
                "404": failure_response("Employee not found")
            }
        },
        "delete": {
            "summary": "Delete an employee",
            "responses": {
                "200": envelope_response("Employee deleted", schema_ref("MessageEnvelope")),
                "404": failure_response("Employee not found")
            }
        }
    })
}

fn health() -> Value {
    json!({
        "get": {
            "summary": "Liveness probe",
            "responses": { "200": envelope_response("Service is up", json!({ "type": "object" })) }
        }
    })
}

fn schemas() -> Value {
    json!({
        "Employee": {
            "type": "object",
            "required": ["id", "name", "salary", "joiningYear"],
            "properties": {
                "id": { "type": "integer", "minimum": 1 },
                "name": { "type": "string", "minLength": 1 },
                "salary": { "type": "integer", "minimum": 0 },
                "joiningYear": { "type": "integer", "nullable": true }
            }
        },
        "CreateEmployee": {
            "type": "object",
            "required": ["id", "name"],
            "properties": {
                "id": { "type": "integer", "minimum": 1 },
                "name": { "type": "string", "minLength": 1 },
                "salary": { "type": "integer", "description": "Defaults to 0 when missing or not numeric." },
                "joiningYear": { "type": "integer", "description": "Defaults to null when missing or not numeric." }
            }
        },
        "UpdateEmployee": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "minLength": 1 },
                "salary": { "type": "integer", "description": "Left unchanged when not numeric." },
                "joiningYear": { "type": "integer", "description": "Left unchanged when not numeric." }
            }
        },
        "MessageEnvelope": {
            "type": "object",
            "required": ["success", "message"],
            "properties": {
                "success": { "type": "boolean" },
                "message": { "type": "string" }
            }
        }
    })
}

fn json_body(schema: &str) -> Value {
    json!({
        "required": false,
        "content": { "application/json": { "schema": schema_ref(schema) } }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn query_param(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": false,
        "description": description,
        "schema": { "type": "string" }
    })
}

fn envelope_response(description: &str, data: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": {
            "type": "object",
            "required": ["success"],
            "properties": {
                "success": { "type": "boolean" },
                "message": { "type": "string" },
                "data": data
            }
        } } }
    })
}

fn record_response(description: &str) -> Value {
    envelope_response(description, schema_ref("Employee"))
}

fn list_response(description: &str) -> Value {
    envelope_response(
        description,
        json!({ "type": "array", "items": schema_ref("Employee") }),
    )
}

fn failure_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema_ref("MessageEnvelope") } }
    })
}
