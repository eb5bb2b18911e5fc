//! Domain client routes and payloads

mod support;

use reqwest::Method;
use serde_json::json;

use coolify_api::models::{
    CreateBackupInput, CreateDatabaseInput, CreateDeploymentInput, CreateEnvironmentInput,
    CreateEnvironmentVariableInput, CreatePublicApplicationInput, CreateServiceInput,
    CreateSshKeyInput, DatabaseType, DeploymentStatus, ResourceType, UpdateApplicationInput,
    UpdateEnvironmentVariableInput, UpdateResourceInput, UpdateServerInput,
};
use coolctl::ClientError;

use support::{body_json, MockTransport};

fn route(transport: &MockTransport) -> (Method, String) {
    let request = transport.last_request();
    let path = request
        .url
        .strip_prefix("https://coolify.example.com/api/v1")
        .expect("unexpected base URL")
        .to_string();
    (request.method, path)
}

#[tokio::test]
async fn test_system_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, json!({"status": "ok", "version": "4.0.0"}));
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(route(&transport), (Method::GET, "/health".to_string()));

    transport.respond_json(
        200,
        json!({
            "id": "0",
            "name": "Root Team",
            "members": [{"id": "1", "email": "ops@example.com", "role": "owner"}],
        }),
    );
    let team = client.get_current_team().await.unwrap();
    assert_eq!(team.members.unwrap()[0].role, "owner");
    assert_eq!(route(&transport), (Method::GET, "/teams/current".to_string()));

    transport.respond_json(200, json!({"data": []}));
    assert!(client.get_teams().await.unwrap().is_empty());
    assert_eq!(route(&transport), (Method::GET, "/teams".to_string()));

    transport.respond_json(
        200,
        json!({"data": [
            {"uuid": "a-1", "type": "application", "name": "api", "status": "running"},
            {"uuid": "d-1", "type": "database", "name": "orders", "status": "exited"},
        ]}),
    );
    let resources = client.get_resources().await.unwrap();
    assert_eq!(resources[1].resource_type, "database");
    assert_eq!(route(&transport), (Method::GET, "/resources".to_string()));
}

#[tokio::test]
async fn test_environment_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(
        200,
        json!({"name": "staging", "projectUuid": "p-1", "isProduction": false, "createdAt": "2024-05-01"}),
    );
    let input = CreateEnvironmentInput {
        name: "staging".to_string(),
        is_production: Some(false),
    };
    let env = client.create_environment("p-1", &input).await.unwrap();
    assert_eq!(env.project_uuid, "p-1");
    assert_eq!(
        route(&transport),
        (Method::POST, "/projects/p-1/environments".to_string())
    );

    transport.respond(204, b"");
    client.delete_environment("p-1", "staging").await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::DELETE, "/projects/p-1/environments/staging".to_string())
    );
}

#[tokio::test]
async fn test_server_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, support::server("s-1"));
    let update = UpdateServerInput {
        port: Some(2222),
        ..Default::default()
    };
    client.update_server("s-1", &update).await.unwrap();
    assert_eq!(route(&transport), (Method::PATCH, "/servers/s-1".to_string()));
    assert_eq!(body_json(&transport.last_request()), json!({"port": 2222}));

    let update = UpdateServerInput {
        port: Some(70000),
        ..Default::default()
    };
    let err = client.update_server("s-1", &update).await.unwrap_err();
    match err {
        ClientError::InvalidInput(validation) => assert!(validation.has_path("port")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.calls(), 1);

    transport.respond_json(200, json!({"valid": true, "message": "Server is reachable"}));
    let validation = client.validate_server("s-1").await.unwrap();
    assert!(validation.valid);
    assert_eq!(
        route(&transport),
        (Method::GET, "/servers/s-1/validate".to_string())
    );
}

#[tokio::test]
async fn test_application_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, support::application("a-1"));
    let input = CreatePublicApplicationInput {
        project_uuid: "p-1".to_string(),
        environment_name: "production".to_string(),
        name: "api".to_string(),
        repository: "https://github.com/acme/api".to_string(),
        branch: None,
    };
    client.create_public_application(&input).await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::POST, "/applications/public".to_string())
    );

    transport.respond_json(200, support::deployment("dep-1", "a-1"));
    let deployment = client.restart_application("a-1").await.unwrap();
    assert_eq!(deployment.status, DeploymentStatus::Waiting);
    assert_eq!(
        route(&transport),
        (Method::POST, "/applications/a-1/restart".to_string())
    );
    assert!(transport.last_request().body.is_none());

    transport.respond_json(200, json!({"data": {"logs": "listening on :3000\n"}}));
    let logs = client.get_application_logs("a-1").await.unwrap();
    assert_eq!(logs, "listening on :3000\n");
    assert_eq!(
        route(&transport),
        (Method::GET, "/applications/a-1/logs".to_string())
    );

    let update = UpdateApplicationInput {
        build_pack: Some("buildpacks".to_string()),
        ..Default::default()
    };
    let err = client.update_application("a-1", &update).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn test_application_env_var_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, json!({"data": [support::env_var("e-1", "DATABASE_URL")]}));
    let vars = client.get_application_env_vars("a-1").await.unwrap();
    assert_eq!(vars[0].key, "DATABASE_URL");
    assert_eq!(route(&transport), (Method::GET, "/applications/a-1/envs".to_string()));

    transport.respond_json(200, support::env_var("e-2", "PORT"));
    let input = CreateEnvironmentVariableInput {
        key: "PORT".to_string(),
        value: "3000".to_string(),
        ..Default::default()
    };
    client.create_application_env_var("a-1", &input).await.unwrap();
    assert_eq!(
        body_json(&transport.last_request()),
        json!({"key": "PORT", "value": "3000"})
    );

    transport.respond_json(200, support::env_var("e-2", "PORT"));
    let update = UpdateEnvironmentVariableInput {
        is_secret: Some(true),
        ..Default::default()
    };
    client
        .update_application_env_var("a-1", "e-2", &update)
        .await
        .unwrap();
    assert_eq!(
        route(&transport),
        (Method::PATCH, "/applications/a-1/envs/e-2".to_string())
    );

    transport.respond(204, b"");
    client.delete_application_env_var("a-1", "e-2").await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::DELETE, "/applications/a-1/envs/e-2".to_string())
    );
}

#[tokio::test]
async fn test_database_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, support::database("db-1", "postgresql"));
    let input = CreateDatabaseInput {
        server_uuid: "s-1".to_string(),
        project_uuid: "p-1".to_string(),
        environment_name: "production".to_string(),
        name: "orders".to_string(),
        description: None,
    };
    let db = client
        .create_database(DatabaseType::Postgresql, &input)
        .await
        .unwrap();
    assert_eq!(db.db_type, DatabaseType::Postgresql);
    assert_eq!(
        route(&transport),
        (Method::POST, "/databases/postgresql".to_string())
    );

    transport.respond_json(200, support::database("db-1", "postgresql"));
    client.restart_database("db-1").await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::POST, "/databases/db-1/restart".to_string())
    );

    transport.respond_json(200, support::database("db-1", "postgresql"));
    let update = UpdateResourceInput {
        name: Some("orders-main".to_string()),
        description: None,
    };
    client.update_database("db-1", &update).await.unwrap();
    assert_eq!(route(&transport), (Method::PATCH, "/databases/db-1".to_string()));
}

#[tokio::test]
async fn test_database_backup_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    let err = client
        .create_database_backup(
            "db-1",
            &CreateBackupInput {
                enabled: true,
                schedule: Some("0 3 * * *".to_string()),
                retention_days: Some(0),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));
    assert_eq!(transport.calls(), 0);

    transport.respond_json(
        200,
        json!({
            "uuid": "b-1",
            "enabled": true,
            "schedule": "0 3 * * *",
            "retentionDays": 7,
            "databaseUuid": "db-1",
            "databaseName": "orders",
        }),
    );
    let backup = client
        .create_database_backup(
            "db-1",
            &CreateBackupInput {
                enabled: true,
                schedule: Some("0 3 * * *".to_string()),
                retention_days: Some(7),
            },
        )
        .await
        .unwrap();
    assert_eq!(backup.retention_days, Some(7));
    assert_eq!(
        route(&transport),
        (Method::POST, "/databases/db-1/backups".to_string())
    );

    transport.respond_json(
        200,
        json!({"data": [{
            "uuid": "x-1",
            "backupId": "b-1",
            "status": "success",
            "size": 1048576,
            "createdAt": "2024-05-02T03:00:00Z",
            "finishedAt": "2024-05-02T03:00:12Z",
        }]}),
    );
    let runs = client.get_backup_executions("db-1", "b-1").await.unwrap();
    assert_eq!(runs[0].size, Some(1048576.0));
    assert_eq!(
        route(&transport),
        (Method::GET, "/databases/db-1/backups/b-1/executions".to_string())
    );
}

#[tokio::test]
async fn test_service_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, support::service("svc-1"));
    let input = CreateServiceInput {
        project_uuid: "p-1".to_string(),
        environment_name: "production".to_string(),
        name: "analytics".to_string(),
        service_type: "plausible".to_string(),
    };
    let service = client.create_service(&input).await.unwrap();
    assert_eq!(service.service_type, "plausible");
    assert_eq!(body_json(&transport.last_request())["type"], "plausible");

    transport.respond_json(200, support::service("svc-1"));
    client.stop_service("svc-1").await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::POST, "/services/svc-1/stop".to_string())
    );

    transport.respond_json(200, json!({"data": []}));
    client.get_service_env_vars("svc-1").await.unwrap();
    assert_eq!(route(&transport), (Method::GET, "/services/svc-1/envs".to_string()));
}

#[tokio::test]
async fn test_deployment_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    transport.respond_json(200, support::deployment("dep-1", "a-1"));
    let input = CreateDeploymentInput::new("db-1", ResourceType::Database);
    client.deploy(&input).await.unwrap();
    assert_eq!(route(&transport), (Method::POST, "/deploy".to_string()));
    assert_eq!(
        body_json(&transport.last_request()),
        json!({"resourceUuid": "db-1", "resourceType": "database"})
    );

    transport.respond_json(200, json!({"data": [support::deployment("dep-1", "a-1")]}));
    let history = client.get_application_deployments("a-1").await.unwrap();
    assert_eq!(history[0].resource_uuid(), Some("a-1"));
    assert_eq!(
        route(&transport),
        (Method::GET, "/deployments/applications/a-1".to_string())
    );

    let mut cancelled = support::deployment("dep-1", "a-1");
    cancelled["status"] = json!("cancelled");
    transport.respond_json(200, cancelled);
    let deployment = client.cancel_deployment("dep-1").await.unwrap();
    assert_eq!(deployment.status, DeploymentStatus::Cancelled);
    assert_eq!(
        route(&transport),
        (Method::POST, "/deployments/dep-1/cancel".to_string())
    );
}

#[tokio::test]
async fn test_security_routes() {
    let transport = MockTransport::new();
    let client = transport.client();

    let err = client
        .create_ssh_key(&CreateSshKeyInput {
            name: "deploy".to_string(),
            private_key: String::new(),
            public_key: "ssh-ed25519 AAAA".to_string(),
        })
        .await
        .unwrap_err();
    match err {
        ClientError::InvalidInput(validation) => assert!(validation.has_path("privateKey")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.calls(), 0);

    transport.respond(204, b"");
    client.delete_ssh_key("k-1").await.unwrap();
    assert_eq!(
        route(&transport),
        (Method::DELETE, "/security/keys/k-1".to_string())
    );

    transport.respond_json(
        200,
        json!({"data": [{
            "id": 3,
            "name": "acme-bot",
            "appId": "123456",
            "installationId": "7890",
            "teamId": "0",
            "createdAt": "2024-05-01T10:00:00Z",
        }]}),
    );
    let apps = client.get_github_apps().await.unwrap();
    assert_eq!(apps[0].id, 3);
    assert_eq!(route(&transport), (Method::GET, "/github-apps".to_string()));

    transport.respond_json(
        200,
        json!({"data": [{
            "uuid": "t-1",
            "name": "hetzner",
            "provider": "hetzner",
            "isValid": "yes",
            "teamId": "0",
            "createdAt": "2024-05-01T10:00:00Z",
        }]}),
    );
    let err = client.get_cloud_tokens().await.unwrap_err();
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("data[0].isValid"));
}
