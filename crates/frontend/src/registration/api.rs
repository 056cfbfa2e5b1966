use contracts::domain::instructors::InstructorRegisterDto;
use contracts::domain::students::StudentRegisterDto;
use contracts::system::users::{CreateAccountDto, RegisterAccountResponse, RegisterRoleResponse};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_base;

/// Pull the backend's failure_message out of an error response, falling
/// back to the bare status code.
async fn failure_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(message) = body.get("failure_message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    format!("Request failed: {}", status)
}

/// Create a new account
pub async fn register_user(dto: &CreateAccountDto) -> Result<RegisterAccountResponse, String> {
    let response = Request::post(&format!("{}/api/register/user", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<RegisterAccountResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a student profile for the logged-in account
pub async fn register_student(
    dto: &StudentRegisterDto,
    access_token: &str,
) -> Result<RegisterRoleResponse, String> {
    register_role("student", dto, access_token).await
}

/// Register an instructor profile for the logged-in account
pub async fn register_instructor(
    dto: &InstructorRegisterDto,
    access_token: &str,
) -> Result<RegisterRoleResponse, String> {
    register_role("instructor", dto, access_token).await
}

async fn register_role<T: serde::Serialize>(
    role: &str,
    dto: &T,
    access_token: &str,
) -> Result<RegisterRoleResponse, String> {
    let response = Request::post(&format!("{}/api/register/{}", api_base(), role))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<RegisterRoleResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
