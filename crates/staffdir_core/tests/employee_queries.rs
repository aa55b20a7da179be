use chrono::NaiveDate;
use staffdir_core::{Employee, EmployeeId, EmployeeRepository, InMemoryEmployeeRepository};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn employee(
    id: EmployeeId,
    first_name: &str,
    middle_initial: char,
    last_name: &str,
    email: &str,
    birth_date: NaiveDate,
    hire_date: NaiveDate,
    salary: u32,
) -> Employee {
    Employee {
        id,
        title: "Mrs.".to_string(),
        first_name: first_name.to_string(),
        middle_initial,
        last_name: last_name.to_string(),
        gender: 'F',
        email: email.to_string(),
        birth_date,
        hire_date,
        salary,
    }
}

fn fixture_repo() -> InMemoryEmployeeRepository {
    InMemoryEmployeeRepository::new(vec![
        employee(
            198429,
            "Serafina",
            'I',
            "Bumgarner",
            "serafina.bumgarner@exxonmobil.com",
            date(1982, 9, 21),
            date(2008, 2, 1),
            69294,
        ),
        employee(
            178566,
            "Juliette",
            'M',
            "Rojo",
            "juliette.rojo@yahoo.co.uk",
            date(1967, 5, 8),
            date(2011, 5, 26),
            193912,
        ),
        employee(
            540293,
            "Jerafina",
            'I',
            "Bumjarner",
            "jerafina.bumjarner@exxonmobil.com",
            date(1982, 9, 21),
            date(2008, 2, 1),
            69295,
        ),
    ])
}

fn ids(results: &[&Employee]) -> Vec<EmployeeId> {
    results.iter().map(|employee| employee.id).collect()
}

#[test]
fn employee_by_id_returns_matching_record() {
    let repo = fixture_repo();

    let found = repo.employee_by_id(198429).expect("id should resolve");
    assert_eq!(found.first_name, "Serafina");
}

#[test]
fn employee_by_id_returns_none_for_absent_id() {
    let repo = fixture_repo();

    assert!(repo.employee_by_id(999999).is_none());
}

#[test]
fn last_name_search_matches_partial_fragment_in_roster_order() {
    let repo = fixture_repo();

    let matched = repo.employees_by_last_name_containing("Bum");
    assert_eq!(ids(&matched), vec![198429, 540293]);
}

#[test]
fn last_name_search_matches_full_name() {
    let repo = fixture_repo();

    let matched = repo.employees_by_last_name_containing("Bumgarner");
    assert_eq!(ids(&matched), vec![198429]);
}

#[test]
fn last_name_search_is_case_sensitive() {
    let repo = fixture_repo();

    assert!(repo.employees_by_last_name_containing("bum").is_empty());
}

#[test]
fn last_name_search_with_empty_fragment_matches_everyone() {
    let repo = fixture_repo();

    let matched = repo.employees_by_last_name_containing("");
    assert_eq!(matched.len(), repo.len());
}

#[test]
fn hire_date_range_returns_employees_hired_within_bounds() {
    let repo = fixture_repo();

    let matched = repo.employees_by_hire_date_range(date(2008, 1, 1), date(2008, 3, 1));
    assert_eq!(ids(&matched), vec![198429, 540293]);
}

#[test]
fn hire_date_range_bounds_are_inclusive() {
    let repo = fixture_repo();

    // Both boundary employees were hired exactly on 2/1/2008.
    let matched = repo.employees_by_hire_date_range(date(2008, 2, 1), date(2008, 2, 1));
    assert_eq!(ids(&matched), vec![198429, 540293]);
}

#[test]
fn hire_date_range_outside_roster_is_empty() {
    let repo = fixture_repo();

    let matched = repo.employees_by_hire_date_range(date(1999, 1, 1), date(1999, 12, 31));
    assert!(matched.is_empty());
}

#[test]
fn inverted_hire_date_range_is_empty() {
    let repo = fixture_repo();

    let matched = repo.employees_by_hire_date_range(date(2008, 3, 1), date(2008, 1, 1));
    assert!(matched.is_empty());
}

#[test]
fn age_range_on_reference_date_returns_employees_within_bounds() {
    let repo = fixture_repo();

    // On 11/1/2022 the two 1982-born employees are 40, Juliette is 55.
    let matched = repo.employees_by_age_range_on(date(2022, 11, 1), 40, 43);
    assert_eq!(ids(&matched), vec![198429, 540293]);

    let matched = repo.employees_by_age_range_on(date(2022, 11, 1), 55, 55);
    assert_eq!(ids(&matched), vec![178566]);
}

#[test]
fn age_range_bounds_are_inclusive() {
    let repo = fixture_repo();

    let matched = repo.employees_by_age_range_on(date(2022, 11, 1), 40, 40);
    assert_eq!(ids(&matched), vec![198429, 540293]);
}

#[test]
fn inverted_age_range_is_empty() {
    let repo = fixture_repo();

    let matched = repo.employees_by_age_range_on(date(2022, 11, 1), 43, 40);
    assert!(matched.is_empty());
}

#[test]
fn current_age_range_never_panics_and_respects_bounds() {
    let repo = fixture_repo();

    // Wall-clock dependent, so only invariants are asserted here; exact
    // membership is covered by the `_on` variants above.
    for found in repo.employees_by_age_range(0, 200) {
        assert!(repo.employee_by_id(found.id).is_some());
    }
    assert!(repo.employees_by_age_range(200, 300).is_empty());
}

#[test]
fn salary_range_returns_employees_within_bounds() {
    let repo = fixture_repo();

    let matched = repo.employees_by_salary_range(69294, 69295);
    assert_eq!(ids(&matched), vec![198429, 540293]);
}

#[test]
fn salary_range_with_single_point_matches_exact_salary() {
    let repo = fixture_repo();

    let matched = repo.employees_by_salary_range(193912, 193912);
    assert_eq!(ids(&matched), vec![178566]);
}

#[test]
fn salary_range_below_roster_is_empty() {
    let repo = fixture_repo();

    assert!(repo.employees_by_salary_range(0, 1000).is_empty());
}

#[test]
fn repository_is_usable_through_trait_object() {
    let repo = fixture_repo();
    let queries: &dyn EmployeeRepository = &repo;

    assert_eq!(queries.employees_by_salary_range(0, u32::MAX).len(), 3);
    assert!(queries.employee_by_id(178566).is_some());
}

#[test]
fn empty_roster_answers_every_query_with_empty_results() {
    let repo = InMemoryEmployeeRepository::new(Vec::new());

    assert!(repo.is_empty());
    assert!(repo.employee_by_id(1).is_none());
    assert!(repo.employees_by_last_name_containing("").is_empty());
    assert!(repo
        .employees_by_hire_date_range(date(2000, 1, 1), date(2030, 1, 1))
        .is_empty());
    assert!(repo
        .employees_by_age_range_on(date(2022, 11, 1), 0, 200)
        .is_empty());
    assert!(repo.employees_by_salary_range(0, u32::MAX).is_empty());
}

#[test]
fn duplicate_ids_resolve_to_first_occurrence() {
    let first = employee(
        7,
        "Ada",
        'L',
        "Nile",
        "ada.nile@example.com",
        date(1980, 1, 1),
        date(2005, 6, 1),
        80000,
    );
    let mut second = first.clone();
    second.first_name = "Shadow".to_string();
    let repo = InMemoryEmployeeRepository::new(vec![first, second]);

    let found = repo.employee_by_id(7).expect("id should resolve");
    assert_eq!(found.first_name, "Ada");
}
