//! Built-in catalog of default tasks, used only to pre-populate new tasks.

use chrono::Weekday;
use std::sync::OnceLock;

use crate::models::{CustomUnit, Domain, NewTask, RecurrenceRule};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub domain: Domain,
    pub rule: RecurrenceRule,
    pub default_cost: Option<f64>,
}

impl TaskTemplate {
    /// Creation data pre-filled from this template.
    pub fn instantiate(&self) -> NewTask {
        NewTask {
            template_id: Some(self.id.to_string()),
            name: self.name.to_string(),
            category: self.category.to_string(),
            domain: self.domain,
            rule: self.rule.clone(),
            cost: self.default_cost,
            ..Default::default()
        }
    }
}

static CATALOG: OnceLock<Vec<TaskTemplate>> = OnceLock::new();

fn template(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    domain: Domain,
    rule: RecurrenceRule,
    default_cost: Option<f64>,
) -> TaskTemplate {
    TaskTemplate { id, name, category, domain, rule, default_cost }
}

#[rustfmt::skip]
pub fn catalog() -> &'static [TaskTemplate] {
    CATALOG.get_or_init(|| {
        vec![
            // HOME
            template("home-air-filter",           "Change Air Filter",        "Air Filters",              Domain::Home, RecurrenceRule::monthly(3),                   None),
            template("home-trash",                "Take Out Trash",           "Trash/Recycling",          Domain::Home, RecurrenceRule::weekly_on(Weekday::Sun),      None),
            template("home-recycling",            "Take Out Recycling",       "Trash/Recycling",          Domain::Home, RecurrenceRule::weekly_on(Weekday::Sun),      None),
            template("home-lawn-mow",             "Mow Lawn",                 "Lawn Care",                Domain::Home, RecurrenceRule::weekly(2),                    None),
            template("home-house-cleaning",       "Deep House Cleaning",      "House Cleaning",           Domain::Home, RecurrenceRule::monthly(1),                   None),
            template("home-pest-control",         "Pest Control Service",     "Pest Control",             Domain::Home, RecurrenceRule::monthly(3),                   None),
            template("home-water-filter",         "Replace Water Filter",     "Water Filter Replacement", Domain::Home, RecurrenceRule::monthly(6),                   None),
            template("home-hvac",                 "HVAC Service",             "HVAC Service",             Domain::Home, RecurrenceRule::yearly(1),                    None),
            template("home-hoa",                  "Pay HOA",                  "Bills",                    Domain::Home, RecurrenceRule::monthly(1),                   None),
            template("home-electricity",          "Pay Electricity",          "Bills",                    Domain::Home, RecurrenceRule::monthly(1),                   None),
            template("home-water",                "Pay Water",                "Bills",                    Domain::Home, RecurrenceRule::monthly(1),                   None),
            template("home-internet",             "Pay Internet",             "Bills",                    Domain::Home, RecurrenceRule::monthly(1),                   None),

            // CAR
            template("car-oil-change",            "Oil Change",               "Oil Change",               Domain::Car,  RecurrenceRule::monthly(6),                   None),
            template("car-tire-rotation",         "Tire Rotation",            "Tire Rotation",            Domain::Car,  RecurrenceRule::monthly(6),                   None),
            template("car-emissions",             "Emissions Test",           "Emissions Test",           Domain::Car,  RecurrenceRule::yearly(1),                    None),
            template("car-wash",                  "Car Wash",                 "Car Wash",                 Domain::Car,  RecurrenceRule::monthly(1),                   None),
            template("car-insurance",             "Insurance Renewal",        "Insurance Renewal",        Domain::Car,  RecurrenceRule::yearly(1),                    None),
            template("car-registration",          "Registration Renewal",     "Registration Renewal",     Domain::Car,  RecurrenceRule::yearly(1),                    None),
            template("car-license",               "License Renewal",          "License Renewal",          Domain::Car,  RecurrenceRule::yearly(5),                    None),
            template("car-service",               "General Service",          "General Service",          Domain::Car,  RecurrenceRule::monthly(6),                   None),
            template("car-warranty",              "Warranty Tracking",        "Warranty Tracking",        Domain::Car,  RecurrenceRule::yearly(1),                    None),

            // PET
            template("pet-vaccination",           "Vaccination",              "Vaccinations",             Domain::Pet,  RecurrenceRule::yearly(1),                    None),
            template("pet-heartworm",             "Heartworm Prevention",     "Heartworm Prevention",     Domain::Pet,  RecurrenceRule::monthly(1),                   None),
            template("pet-flea-tick",             "Flea & Tick Prevention",   "Flea & Tick Prevention",   Domain::Pet,  RecurrenceRule::monthly(1),                   None),
            template("pet-food",                  "Food Refill",              "Food Refill Tracking",     Domain::Pet,  RecurrenceRule::monthly(1),                   None),
            template("pet-grooming",              "Grooming",                 "Grooming",                 Domain::Pet,  RecurrenceRule::custom(6, CustomUnit::Weeks), None),
            template("pet-vet",                   "Vet Checkup",              "Vet Checkups",             Domain::Pet,  RecurrenceRule::yearly(1),                    None),
            template("pet-medication",            "Medication",               "Medications",              Domain::Pet,  RecurrenceRule::Daily,                        None),
            template("pet-supplements",           "Supplements",              "Supplements",              Domain::Pet,  RecurrenceRule::Daily,                        None),

            // LIFE
            template("life-subscription-netflix", "Netflix Subscription",     "Subscriptions",            Domain::Life, RecurrenceRule::monthly(1),                   Some(15.99)),
            template("life-subscription-apple",   "Apple Subscription",       "Subscriptions",            Domain::Life, RecurrenceRule::monthly(1),                   Some(9.99)),
            template("life-subscription-spotify", "Spotify Subscription",     "Subscriptions",            Domain::Life, RecurrenceRule::monthly(1),                   Some(10.99)),
            template("life-rent",                 "Pay Rent/Mortgage",        "Bills",                    Domain::Life, RecurrenceRule::monthly(1),                   None),
            template("life-credit-card",          "Pay Credit Card",          "Bills",                    Domain::Life, RecurrenceRule::monthly(1),                   None),
            template("life-passport",             "Passport Renewal",         "Admin Documents",          Domain::Life, RecurrenceRule::yearly(10),                   None),
            template("life-drivers-license",      "Driver's License Renewal", "Admin Documents",          Domain::Life, RecurrenceRule::yearly(5),                    None),
            template("life-credit-score",         "Check Credit Score",       "Financial",                Domain::Life, RecurrenceRule::monthly(1),                   None),
            template("life-dental",               "Dental Checkup",           "Health",                   Domain::Life, RecurrenceRule::monthly(6),                   None),
            template("life-physical",             "Annual Physical",          "Health",                   Domain::Life, RecurrenceRule::yearly(1),                    None),
            template("life-password",             "Password Rotation",        "Digital Hygiene",          Domain::Life, RecurrenceRule::monthly(3),                   None),
            template("life-photo-cleanup",        "Photo Cleanup",            "Digital Hygiene",          Domain::Life, RecurrenceRule::monthly(6),                   None),
            template("life-anniversary",          "Anniversary",              "Important Dates",          Domain::Life, RecurrenceRule::yearly(1),                    None),
            template("life-birthday",             "Birthday Reminder",        "Important Dates",          Domain::Life, RecurrenceRule::yearly(1),                    None),
        ]
    })
}

pub fn templates_for(domain: Domain) -> impl Iterator<Item = &'static TaskTemplate> {
    catalog().iter().filter(move |template| template.domain == domain)
}

pub fn find_template(id: &str) -> Option<&'static TaskTemplate> {
    catalog().iter().find(|template| template.id == id)
}

/// Creation data for every default task of `domain`, in catalog order.
pub fn seed_tasks(domain: Domain) -> Vec<NewTask> {
    templates_for(domain).map(TaskTemplate::instantiate).collect()
}
