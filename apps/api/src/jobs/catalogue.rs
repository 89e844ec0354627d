use crate::jobs::{Job, JobPage, JobSource};

const SAMPLE_JOBS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Frontend Developer",
        "Tech Solutions",
        "New York",
        "React, JavaScript",
        "https://example.com/job1",
    ),
    (
        "Product Manager",
        "Innovatech",
        "Remote",
        "Agile, product roadmaps",
        "https://example.com/job2",
    ),
    (
        "Data Scientist",
        "DeepData",
        "San Francisco",
        "Python, ML, analytics",
        "https://example.com/job3",
    ),
    (
        "Backend Developer",
        "CodeCraft",
        "New York",
        "Node.js, APIs",
        "https://example.com/job4",
    ),
    (
        "Marketing Specialist",
        "GrowthCo",
        "Los Angeles",
        "Digital marketing, social media",
        "https://example.com/job5",
    ),
    (
        "Sales Representative",
        "SalesPro",
        "Chicago",
        "B2B sales, client relations",
        "https://example.com/job6",
    ),
    (
        "Customer Service",
        "SupportHub",
        "Remote",
        "Customer support, problem solving",
        "https://example.com/job7",
    ),
    (
        "Graphic Designer",
        "CreativeStudio",
        "Miami",
        "Adobe Creative Suite, branding",
        "https://example.com/job8",
    ),
];

pub fn sample_jobs() -> Vec<Job> {
    SAMPLE_JOBS
        .iter()
        .map(|(title, company, location, description, url)| Job {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            url: Some(url.to_string()),
        })
        .collect()
}

/// Case-insensitive match: keyword against title, company or description;
/// location against the job location. `None` matches everything.
pub fn filter(keyword: Option<&str>, location: Option<&str>) -> Vec<Job> {
    let keyword = keyword.map(str::to_lowercase);
    let location = location.map(str::to_lowercase);

    sample_jobs()
        .into_iter()
        .filter(|job| {
            let keyword_ok = keyword.as_deref().map_or(true, |k| {
                job.title.to_lowercase().contains(k)
                    || job.company.to_lowercase().contains(k)
                    || job.description.to_lowercase().contains(k)
            });
            let location_ok = location
                .as_deref()
                .map_or(true, |l| job.location.to_lowercase().contains(l));
            keyword_ok && location_ok
        })
        .collect()
}

/// Single-page result over sample data.
pub fn sample_page(jobs: Vec<Job>, notice: Option<String>) -> JobPage {
    JobPage {
        total_results: jobs.len() as u64,
        total_pages: 1,
        jobs,
        source: JobSource::Sample,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches_description() {
        let jobs = filter(Some("python"), None);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "DeepData");
    }

    #[test]
    fn test_location_only() {
        let jobs = filter(None, Some("REMOTE"));
        let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Product Manager", "Customer Service"]);
    }

    #[test]
    fn test_keyword_and_location_combined() {
        let jobs = filter(Some("developer"), Some("new york"));
        assert_eq!(jobs.len(), 2);
        assert!(filter(Some("developer"), Some("miami")).is_empty());
    }

    #[test]
    fn test_sample_page_single_page() {
        let page = sample_page(sample_jobs(), None);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 8);
    }
}
