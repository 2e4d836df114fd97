//! Editable job postings and job applications.

use super::types::Job;
use crate::errors::AppError;
use serde::Serialize;

/// Resume file extensions accepted by the backend.
const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Body of `POST /jobs` and `PATCH /jobs/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            experience: String::new(),
            salary: String::new(),
            description: String::new(),
            responsibilities: vec![String::new()],
        }
    }
}

/// Single-line and free-text fields of a [`JobForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    Experience,
    Salary,
    Description,
}

impl JobField {
    pub const ALL: [JobField; 6] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::Experience,
        JobField::Salary,
        JobField::Description,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            JobField::Title => "Job Title",
            JobField::Company => "Company Name",
            JobField::Location => "Location",
            JobField::Experience => "Experience Required",
            JobField::Salary => "Salary Range",
            JobField::Description => "Job Description",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, JobField::Description)
    }
}

impl JobForm {
    /// Prefills the form from an existing posting.
    pub fn from_job(job: &Job) -> Self {
        let responsibilities = if job.responsibilities.is_empty() {
            vec![String::new()]
        } else {
            job.responsibilities.clone()
        };
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            experience: job.experience.clone(),
            salary: job.salary.clone(),
            description: job.description.clone(),
            responsibilities,
        }
    }

    pub fn field(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Company => &self.company,
            JobField::Location => &self.location,
            JobField::Experience => &self.experience,
            JobField::Salary => &self.salary,
            JobField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: JobField, value: String) {
        let slot = match field {
            JobField::Title => &mut self.title,
            JobField::Company => &mut self.company,
            JobField::Location => &mut self.location,
            JobField::Experience => &mut self.experience,
            JobField::Salary => &mut self.salary,
            JobField::Description => &mut self.description,
        };
        *slot = value;
    }

    pub fn set_responsibility(&mut self, index: usize, value: String) {
        if let Some(slot) = self.responsibilities.get_mut(index) {
            *slot = value;
        }
    }

    pub fn add_responsibility(&mut self) {
        self.responsibilities.push(String::new());
    }

    /// Removes a responsibility; the first entry always stays.
    pub fn remove_responsibility(&mut self, index: usize) {
        if index > 0 && index < self.responsibilities.len() {
            self.responsibilities.remove(index);
        }
    }

    /// Returns a trimmed copy ready to submit.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first blank field.
    pub fn validate(&self) -> Result<JobForm, AppError> {
        for field in JobField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "{} is required.",
                    field.placeholder()
                )));
            }
        }
        if self.responsibilities.iter().any(|item| item.trim().is_empty()) {
            return Err(AppError::Validation(
                "Responsibilities cannot be empty.".to_string(),
            ));
        }

        Ok(JobForm {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            experience: self.experience.trim().to_string(),
            salary: self.salary.trim().to_string(),
            description: self.description.trim().to_string(),
            responsibilities: self
                .responsibilities
                .iter()
                .map(|item| item.trim().to_string())
                .collect(),
        })
    }
}

/// Text fields of a job application; the resume travels separately as a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub experience: String,
    pub current_ctc: String,
    pub expected_ctc: String,
    pub other_details: String,
}

impl ApplicationForm {
    /// Multipart field names and values for `POST /applications`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for blank fields or a malformed email.
    pub fn multipart_fields(&self, job_id: &str) -> Result<Vec<(&'static str, String)>, AppError> {
        let fields = [
            ("name", "Full name", &self.name),
            ("email", "Email address", &self.email),
            ("experience", "Years of experience", &self.experience),
            ("currentCTC", "Current CTC", &self.current_ctc),
            ("expectedCTC", "Expected CTC", &self.expected_ctc),
            ("otherDetails", "Other details", &self.other_details),
        ];

        let mut parts = Vec::with_capacity(fields.len() + 1);
        for (name, label, value) in fields {
            let value = value.trim();
            if value.is_empty() {
                return Err(AppError::Validation(format!("{label} is required.")));
            }
            parts.push((name, value.to_string()));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(AppError::Validation(
                "Enter a valid email address.".to_string(),
            ));
        }

        let job_id = job_id.trim();
        if job_id.is_empty() {
            return Err(AppError::Validation("Job id is required.".to_string()));
        }
        parts.push(("jobId", job_id.to_string()));
        Ok(parts)
    }
}

/// Checks the resume file name has an accepted extension.
///
/// # Errors
///
/// Returns `AppError::Validation` when no file is chosen or the type is not
/// `.pdf`, `.doc`, or `.docx`.
pub fn validate_resume_name(file_name: Option<&str>) -> Result<(), AppError> {
    let Some(file_name) = file_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return Err(AppError::Validation(
            "Please upload your resume.".to_string(),
        ));
    };

    let accepted = file_name
        .rsplit_once('.')
        .is_some_and(|(stem, extension)| {
            !stem.is_empty()
                && RESUME_EXTENSIONS
                    .iter()
                    .any(|accepted| extension.eq_ignore_ascii_case(accepted))
        });
    if accepted {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Resume must be a .pdf, .doc, or .docx file.".to_string(),
        ))
    }
}

fn looks_like_email(value: &str) -> bool {
    value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> JobForm {
        JobForm {
            title: " Rust Engineer ".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            experience: "3+ years".to_string(),
            salary: "$120k".to_string(),
            description: "Build services.".to_string(),
            responsibilities: vec!["Ship code ".to_string()],
        }
    }

    fn filled_application() -> ApplicationForm {
        ApplicationForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experience: "5".to_string(),
            current_ctc: "100000".to_string(),
            expected_ctc: "120000".to_string(),
            other_details: "Available in March".to_string(),
        }
    }

    #[test]
    fn new_form_starts_with_one_blank_responsibility() {
        assert_eq!(JobForm::default().responsibilities, vec![String::new()]);
    }

    #[test]
    fn first_responsibility_cannot_be_removed() {
        let mut form = JobForm::default();
        form.remove_responsibility(0);
        assert_eq!(form.responsibilities.len(), 1);

        form.add_responsibility();
        form.set_responsibility(1, "Review PRs".to_string());
        form.add_responsibility();
        assert_eq!(form.responsibilities.len(), 3);

        form.remove_responsibility(2);
        form.remove_responsibility(9);
        assert_eq!(form.responsibilities, vec![String::new(), "Review PRs".to_string()]);
    }

    #[test]
    fn set_field_updates_matching_value() {
        let mut form = JobForm::default();
        form.set_field(JobField::Salary, "$90k".to_string());
        assert_eq!(form.field(JobField::Salary), "$90k");
        assert_eq!(form.salary, "$90k");
    }

    #[test]
    fn from_job_keeps_at_least_one_responsibility() {
        let job = Job {
            id: "j1".to_string(),
            title: "Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            experience: String::new(),
            salary: String::new(),
            description: String::new(),
            responsibilities: Vec::new(),
            applications: 3,
        };
        let form = JobForm::from_job(&job);
        assert_eq!(form.title, "Rust Engineer");
        assert_eq!(form.responsibilities, vec![String::new()]);
    }

    #[test]
    fn validate_trims_values() {
        let form = filled_form().validate().expect("valid form");
        assert_eq!(form.title, "Rust Engineer");
        assert_eq!(form.responsibilities, vec!["Ship code".to_string()]);
    }

    #[test]
    fn validate_names_first_blank_field() {
        let mut form = filled_form();
        form.company = "  ".to_string();
        assert_eq!(
            form.validate(),
            Err(AppError::Validation("Company Name is required.".to_string()))
        );
    }

    #[test]
    fn validate_rejects_blank_responsibility() {
        let mut form = filled_form();
        form.add_responsibility();
        assert!(form.validate().is_err());
    }

    #[test]
    fn job_form_serializes_backend_field_names() {
        let json = serde_json::to_value(filled_form().validate().expect("valid")).expect("json");
        assert_eq!(json["title"], "Rust Engineer");
        assert_eq!(json["responsibilities"][0], "Ship code");
    }

    #[test]
    fn multipart_fields_include_job_id() {
        let fields = filled_application()
            .multipart_fields(" j1 ")
            .expect("valid application");
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "name",
                "email",
                "experience",
                "currentCTC",
                "expectedCTC",
                "otherDetails",
                "jobId"
            ]
        );
        assert_eq!(fields.last().map(|(_, value)| value.as_str()), Some("j1"));
    }

    #[test]
    fn multipart_fields_reject_blank_and_bad_email() {
        let mut form = filled_application();
        form.other_details = String::new();
        assert_eq!(
            form.multipart_fields("j1"),
            Err(AppError::Validation("Other details is required.".to_string()))
        );

        let mut form = filled_application();
        form.email = "ada.example.com".to_string();
        assert!(form.multipart_fields("j1").is_err());

        assert!(filled_application().multipart_fields("  ").is_err());
    }

    #[test]
    fn resume_must_be_a_document() {
        assert!(validate_resume_name(Some("cv.pdf")).is_ok());
        assert!(validate_resume_name(Some("CV.DOCX")).is_ok());
        assert!(validate_resume_name(Some("resume.doc")).is_ok());
        assert!(validate_resume_name(Some("photo.png")).is_err());
        assert!(validate_resume_name(Some(".pdf")).is_err());
        assert_eq!(
            validate_resume_name(None),
            Err(AppError::Validation("Please upload your resume.".to_string()))
        );
    }
}
