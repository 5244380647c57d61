use super::*;

#[test]
fn free_courses_enroll_directly() {
    assert_eq!(CourseAction::for_course(true, false), CourseAction::Enroll);
}

#[test]
fn purchased_courses_enroll_directly() {
    assert_eq!(CourseAction::for_course(false, true), CourseAction::Enroll);
}

#[test]
fn unpaid_courses_go_to_cart() {
    assert_eq!(CourseAction::for_course(false, false), CourseAction::AddToCart);
    assert_eq!(CourseAction::AddToCart.label(), "Add to cart");
}
