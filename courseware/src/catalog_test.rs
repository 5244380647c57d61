use super::*;

fn course(id: &str, title: &str, description: &str, category: &str, difficulty: &str) -> Course {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "description": description,
        "category": category,
        "difficulty": difficulty,
        "price": 10.0
    }))
    .unwrap()
}

fn catalog() -> Vec<Course> {
    vec![
        course("1", "Intro to Python", "Variables and loops", "Language", "Beginner"),
        course("2", "Advanced JavaScript", "Closures and prototypes", "Language", "Advanced"),
        course("3", "UI/UX Fundamentals", "Design thinking for PYTHON devs", "Graphic Design", "Intermediate"),
        course("4", "Financial Planning", "Budgets", "Finance", "Beginner"),
    ]
}

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn empty_filter_returns_everything_in_order() {
    let courses = catalog();
    let filter = CourseFilter::default();
    assert!(filter.is_empty());
    assert_eq!(ids(&filter_courses(&courses, &filter)), vec!["1", "2", "3", "4"]);
}

#[test]
fn all_sentinel_and_whitespace_search_are_no_ops() {
    let courses = catalog();
    let filter = CourseFilter {
        search: "   ".to_owned(),
        category: ALL.to_owned(),
        difficulty: ALL.to_owned(),
    };
    assert!(filter.is_empty());
    assert_eq!(filter_courses(&courses, &filter).len(), courses.len());
}

#[test]
fn category_filter_returns_only_that_category() {
    let courses = catalog();
    let filter = CourseFilter {
        category: "Language".to_owned(),
        ..CourseFilter::default()
    };
    let result = filter_courses(&courses, &filter);
    assert_eq!(ids(&result), vec!["1", "2"]);
    assert!(result.iter().all(|c| c.category == "Language"));
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    let courses = catalog();
    let filter = CourseFilter {
        search: "python".to_owned(),
        ..CourseFilter::default()
    };
    assert_eq!(ids(&filter_courses(&courses, &filter)), vec!["1", "3"]);
}

#[test]
fn filters_combine_conjunctively() {
    let courses = catalog();
    let filter = CourseFilter {
        search: "python".to_owned(),
        category: "Language".to_owned(),
        difficulty: "Beginner".to_owned(),
    };
    assert_eq!(ids(&filter_courses(&courses, &filter)), vec!["1"]);

    let none = CourseFilter {
        difficulty: "Advanced".to_owned(),
        category: "Finance".to_owned(),
        ..CourseFilter::default()
    };
    assert!(filter_courses(&courses, &none).is_empty());
}

#[test]
fn distinct_categories_dedupes_in_first_seen_order() {
    let mut courses = catalog();
    courses.push(course("5", "Blank", "", "  ", "Beginner"));
    assert_eq!(distinct_categories(&courses), vec!["Language", "Graphic Design", "Finance"]);
}
