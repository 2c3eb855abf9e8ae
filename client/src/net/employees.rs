//! Employee directory: list, add, image upload, and client-side filtering.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::FilePart;
use super::types::{CreatedEmployee, Employee, NewEmployee};

/// Department filter value meaning "no filter".
pub const ALL_DEPARTMENTS: &str = "all";

/// Raw add-employee form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub id_number: String,
    pub phone_number: String,
    pub designation: String,
    pub department: String,
    pub shift: String,
}

impl EmployeeForm {
    /// Require name and email; trim everything.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when name or email is missing.
    pub fn validate(&self) -> Result<NewEmployee, ApiError> {
        let name = self.full_name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ApiError::Validation("Full name and email are required.".to_owned()));
        }
        Ok(NewEmployee {
            name: name.to_owned(),
            email: email.to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
            employee_id_number: self.id_number.trim().to_owned(),
            department: self.department.trim().to_owned(),
            designation: self.designation.trim().to_owned(),
            salary: None,
            shift: self.shift.trim().to_owned(),
        })
    }
}

/// A picked profile image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `GET /api/employees/FetchEmployeeList`.
///
/// # Errors
///
/// Transport, HTTP and decode errors from [`ApiClient`].
pub async fn fetch_employees(client: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    let employees: Option<Vec<Employee>> = client.get_json("/api/employees/FetchEmployeeList").await?;
    Ok(employees.unwrap_or_default())
}

/// Validate and `POST /api/employees/AddEmployee`, then upload `image` when
/// the backend returned an id.
///
/// # Errors
///
/// Validation, transport and HTTP errors from [`ApiClient`]. An upload
/// failure is returned even though the employee was created.
pub async fn add_employee(
    client: &ApiClient,
    form: &EmployeeForm,
    image: Option<ImageUpload>,
) -> Result<CreatedEmployee, ApiError> {
    let body = form.validate()?;
    let response = client.post_json_response("/api/employees/AddEmployee", &body).await?;
    let created = CreatedEmployee::from_body(&response.body);
    if created.id.is_none() {
        log::debug!("AddEmployee returned no id; skipping image upload");
    }
    if let (Some(image), Some(id)) = (image, created.id) {
        upload_employee_image(client, id, image).await?;
    }
    Ok(created)
}

/// `POST /api/employees/{id}/uploadImage` as multipart field `image`.
///
/// # Errors
///
/// Transport and HTTP errors from [`ApiClient`].
pub async fn upload_employee_image(client: &ApiClient, id: i64, image: ImageUpload) -> Result<(), ApiError> {
    let part = FilePart {
        field: "image".to_owned(),
        file_name: image.file_name,
        content_type: image.content_type,
        bytes: image.bytes,
    };
    client.post_multipart(&format!("/api/employees/{id}/uploadImage"), vec![part]).await
}

/// Case-insensitive name/email search combined with an exact department
/// filter (`"all"` disables it).
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str, department: &str) -> Vec<&'a Employee> {
    let needle = query.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| {
            needle.is_empty() || e.name.to_lowercase().contains(&needle) || e.email.to_lowercase().contains(&needle)
        })
        .filter(|e| department == ALL_DEPARTMENTS || e.department == department)
        .collect()
}

/// Sorted, de-duplicated non-empty departments for the filter dropdown.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut names: Vec<String> = employees
        .iter()
        .map(|e| e.department.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect();
    names.sort();
    names.dedup();
    names
}
