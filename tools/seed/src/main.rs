//! Development database seeder.
//!
//! Applies migrations, then fills the database with a demo dataset: an
//! admin account, the gym settings row, five membership plans, three
//! workout templates, and five members with running memberships and paid
//! invoices. Sequence counters are left consistent with the inserted
//! rows, so member codes and invoice numbers allocated afterwards
//! continue where the seed stopped.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations and insert the demo data
//! cargo run -p liftdesk-seed -- --database-url postgres://localhost/liftdesk
//!
//! # Drop every table first and start over
//! DATABASE_URL=postgres://localhost/liftdesk cargo run -p liftdesk-seed -- --fresh
//! ```
//!
//! Re-running without `--fresh` fails on the unique mobile numbers.
//! Logins after seeding: admin `+919876543210` / `admin123`, members
//! `+919876543211`..`15` / `member123`.

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;
use chrono::{DateTime, Datelike, Duration, Utc};
use clap::Parser;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use uuid::Uuid;

use liftdesk_domain::member::{Gender, format_member_code};
use liftdesk_domain::membership::{MembershipStatus, end_date as membership_end_date};
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus, format_invoice_number};
use liftdesk_domain::user::{UserRole, UserStatus};
use liftdesk_domain::workout::{Exercise, WorkoutDay, WorkoutPlanType};
use liftdesk_migration::Migrator;
use liftdesk_schema::{
    gym_settings, members, membership_plans, memberships, payments, sequence_counters, users,
    workout_plans,
};

#[derive(Parser)]
#[command(about = "Migrate and seed a development database")]
struct Args {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Drop all tables and re-run every migration before seeding
    #[arg(long)]
    fresh: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("connect to database")?;

    if args.fresh {
        println!("Recreating schema from scratch");
        Migrator::fresh(&db).await.context("recreate schema")?;
    } else {
        Migrator::up(&db, None).await.context("apply migrations")?;
    }

    let now = Utc::now();

    seed_admin(&db, now).await?;
    seed_settings(&db, now).await?;
    let plans = seed_plans(&db, now).await?;
    seed_workout_templates(&db, now).await?;
    seed_members(&db, &plans, now).await?;
    seed_counters(&db, now.year()).await?;

    println!();
    println!("Seeded. Admin login: +919876543210 / admin123");
    println!("Member logins: +919876543211..15 / member123");
    Ok(())
}

async fn seed_admin(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<()> {
    let hash = bcrypt::hash("admin123", DEFAULT_COST).context("hash admin password")?;
    users::ActiveModel {
        id: Set(Uuid::now_v7()),
        full_name: Set("Liftdesk Admin".to_owned()),
        email: Set(Some("admin@liftdesk.in".to_owned())),
        mobile: Set("+919876543210".to_owned()),
        password_hash: Set(hash),
        role: Set(UserRole::Admin.as_str().to_owned()),
        status: Set(UserStatus::Active.as_str().to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .context("insert admin user")?;
    println!("Admin account");
    Ok(())
}

async fn seed_settings(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<()> {
    gym_settings::ActiveModel {
        id: Set(Uuid::now_v7()),
        gym_name: Set("Liftdesk Gym".to_owned()),
        tagline: Set(Some("Strength has a home".to_owned())),
        address: Set("Residency Road, Srinagar, Jammu & Kashmir 190001".to_owned()),
        phone: Set(Some("+911942501234".to_owned())),
        email: Set(Some("hello@liftdesk.in".to_owned())),
        website: Set(Some("https://liftdesk.in".to_owned())),
        gstin: Set(None),
        logo_url: Set(None),
        working_hours: Set(Some(json!({
            "monday": "06:00-22:00",
            "tuesday": "06:00-22:00",
            "wednesday": "06:00-22:00",
            "thursday": "06:00-22:00",
            "friday": "06:00-22:00",
            "saturday": "07:00-21:00",
            "sunday": "08:00-13:00",
        }))),
        currency: Set("INR".to_owned()),
        timezone: Set("Asia/Kolkata".to_owned()),
        social_links: Set(Some(json!({
            "instagram": "https://instagram.com/liftdeskgym",
            "facebook": "https://facebook.com/liftdeskgym",
        }))),
        notifications: Set(json!({ "smsAlerts": false, "emailAlerts": false })),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .context("insert gym settings")?;
    println!("Gym settings");
    Ok(())
}

/// Plan catalogue. GST stays at zero; the advertised price is the
/// charged price.
async fn seed_plans(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<Vec<membership_plans::Model>> {
    let catalogue: [(&str, i32, i64, &str, &[&str]); 5] = [
        (
            "Monthly",
            30,
            150_000,
            "Month-to-month access",
            &["Access to all equipment", "Locker facility"],
        ),
        (
            "Quarterly",
            90,
            400_000,
            "Three months, billed up front",
            &[
                "Access to all equipment",
                "Locker facility",
                "One diet consultation",
            ],
        ),
        (
            "Half-Yearly",
            180,
            700_000,
            "Six months, billed up front",
            &[
                "Access to all equipment",
                "Locker facility",
                "Quarterly fitness assessment",
            ],
        ),
        (
            "Annual",
            365,
            1_200_000,
            "Twelve months, best value",
            &[
                "Access to all equipment",
                "Locker facility",
                "Quarterly fitness assessment",
                "Two guest passes",
            ],
        ),
        (
            "Personal Training Monthly",
            30,
            500_000,
            "One-on-one sessions with a trainer",
            &[
                "Dedicated trainer",
                "Custom workout and diet plan",
                "Weekly progress review",
            ],
        ),
    ];

    let mut plans = Vec::with_capacity(catalogue.len());
    for (name, duration_days, price_paise, description, features) in catalogue {
        let model = membership_plans::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_owned()),
            duration_days: Set(duration_days),
            base_price_paise: Set(price_paise),
            gst_percent: Set(0),
            final_price_paise: Set(price_paise),
            description: Set(Some(description.to_owned())),
            features: Set(json!(features)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert plan {name}"))?;
        plans.push(model);
    }
    println!("{} membership plans", plans.len());
    Ok(plans)
}

fn day(label: &str, exercises: &[(&str, i32, &str, &str)]) -> WorkoutDay {
    WorkoutDay {
        day: label.to_owned(),
        exercises: exercises
            .iter()
            .map(|&(name, sets, reps, muscle)| Exercise {
                name: name.to_owned(),
                sets,
                reps: reps.to_owned(),
                muscle: muscle.to_owned(),
            })
            .collect(),
    }
}

async fn seed_workout_templates(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<()> {
    let templates = [
        (
            "Beginner Full Body",
            WorkoutPlanType::FullBody,
            3,
            "Three full-body sessions a week for new lifters",
            vec![
                day(
                    "Day 1",
                    &[
                        ("Squat", 3, "8-10", "Legs"),
                        ("Bench Press", 3, "8-10", "Chest"),
                        ("Bent-Over Row", 3, "8-10", "Back"),
                        ("Plank", 3, "60 sec", "Core"),
                    ],
                ),
                day(
                    "Day 2",
                    &[
                        ("Deadlift", 3, "5", "Back"),
                        ("Overhead Press", 3, "8-10", "Shoulders"),
                        ("Lat Pulldown", 3, "10-12", "Back"),
                        ("Leg Press", 3, "10-12", "Legs"),
                    ],
                ),
                day(
                    "Day 3",
                    &[
                        ("Lunge", 3, "10-12", "Legs"),
                        ("Incline Dumbbell Press", 3, "10-12", "Chest"),
                        ("Seated Cable Row", 3, "10-12", "Back"),
                        ("Bicep Curl", 3, "12", "Arms"),
                    ],
                ),
            ],
        ),
        (
            "Push Pull Legs",
            WorkoutPlanType::PushPullLegs,
            6,
            "Two PPL rotations a week",
            vec![
                day(
                    "Push A",
                    &[
                        ("Bench Press", 4, "6-8", "Chest"),
                        ("Overhead Press", 3, "8-10", "Shoulders"),
                        ("Incline Dumbbell Press", 3, "10", "Chest"),
                        ("Tricep Pushdown", 3, "12", "Arms"),
                    ],
                ),
                day(
                    "Pull A",
                    &[
                        ("Deadlift", 3, "5", "Back"),
                        ("Pull-Up", 4, "to failure", "Back"),
                        ("Barbell Row", 3, "8-10", "Back"),
                        ("Barbell Curl", 3, "10-12", "Arms"),
                    ],
                ),
                day(
                    "Legs A",
                    &[
                        ("Squat", 4, "6-8", "Legs"),
                        ("Romanian Deadlift", 3, "8-10", "Hamstrings"),
                        ("Leg Press", 3, "10-12", "Legs"),
                        ("Standing Calf Raise", 4, "15", "Calves"),
                    ],
                ),
                day(
                    "Push B",
                    &[
                        ("Overhead Press", 4, "6-8", "Shoulders"),
                        ("Dumbbell Bench Press", 3, "10", "Chest"),
                        ("Lateral Raise", 4, "12-15", "Shoulders"),
                        ("Overhead Tricep Extension", 3, "12", "Arms"),
                    ],
                ),
                day(
                    "Pull B",
                    &[
                        ("Barbell Row", 4, "6-8", "Back"),
                        ("Lat Pulldown", 3, "10-12", "Back"),
                        ("Face Pull", 3, "15", "Shoulders"),
                        ("Hammer Curl", 3, "10-12", "Arms"),
                    ],
                ),
                day(
                    "Legs B",
                    &[
                        ("Front Squat", 4, "6-8", "Legs"),
                        ("Leg Curl", 3, "10-12", "Hamstrings"),
                        ("Walking Lunge", 3, "12", "Legs"),
                        ("Seated Calf Raise", 4, "15", "Calves"),
                    ],
                ),
            ],
        ),
        (
            "Bro Split",
            WorkoutPlanType::BroSplit,
            5,
            "One muscle group a day",
            vec![
                day(
                    "Chest",
                    &[
                        ("Bench Press", 4, "8-10", "Chest"),
                        ("Incline Dumbbell Press", 3, "10", "Chest"),
                        ("Cable Fly", 3, "12-15", "Chest"),
                        ("Push-Up", 3, "to failure", "Chest"),
                    ],
                ),
                day(
                    "Back",
                    &[
                        ("Deadlift", 3, "5", "Back"),
                        ("Pull-Up", 4, "8", "Back"),
                        ("Barbell Row", 3, "8-10", "Back"),
                        ("Lat Pulldown", 3, "10-12", "Back"),
                    ],
                ),
                day(
                    "Shoulders",
                    &[
                        ("Overhead Press", 4, "8-10", "Shoulders"),
                        ("Lateral Raise", 4, "12-15", "Shoulders"),
                        ("Rear Delt Fly", 3, "15", "Shoulders"),
                        ("Shrug", 3, "12", "Traps"),
                    ],
                ),
                day(
                    "Arms",
                    &[
                        ("Barbell Curl", 4, "10", "Arms"),
                        ("Close-Grip Bench Press", 4, "8-10", "Arms"),
                        ("Hammer Curl", 3, "12", "Arms"),
                        ("Tricep Pushdown", 3, "12", "Arms"),
                    ],
                ),
                day(
                    "Legs",
                    &[
                        ("Squat", 4, "8-10", "Legs"),
                        ("Leg Press", 3, "10-12", "Legs"),
                        ("Leg Curl", 3, "12", "Hamstrings"),
                        ("Standing Calf Raise", 4, "15", "Calves"),
                    ],
                ),
            ],
        ),
    ];

    let count = templates.len();
    for (name, plan_type, days_per_week, description, days) in templates {
        workout_plans::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_owned()),
            plan_type: Set(plan_type.as_str().to_owned()),
            description: Set(Some(description.to_owned())),
            days: Set(serde_json::to_value(&days).context("encode workout days")?),
            days_per_week: Set(days_per_week),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert workout plan {name}"))?;
    }
    println!("{count} workout templates");
    Ok(())
}

struct DemoMember {
    name: &'static str,
    mobile: &'static str,
    gender: Gender,
    date_of_birth: &'static str,
    goal: &'static str,
    emergency: &'static str,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    method: PaymentMethod,
}

const DEMO_MEMBERS: [DemoMember; 5] = [
    DemoMember {
        name: "Rashid Khan",
        mobile: "+919876543211",
        gender: Gender::Male,
        date_of_birth: "1993-04-18",
        goal: "Build muscle",
        emergency: "+919797001121",
        height_cm: Some(176.0),
        weight_kg: Some(74.5),
        method: PaymentMethod::Cash,
    },
    DemoMember {
        name: "Aisha Bhat",
        mobile: "+919876543212",
        gender: Gender::Female,
        date_of_birth: "1997-11-02",
        goal: "Weight loss",
        emergency: "+919797001122",
        height_cm: Some(162.0),
        weight_kg: Some(61.0),
        method: PaymentMethod::Upi,
    },
    DemoMember {
        name: "Imran Lone",
        mobile: "+919876543213",
        gender: Gender::Male,
        date_of_birth: "1990-07-25",
        goal: "General fitness",
        emergency: "+919797001123",
        height_cm: None,
        weight_kg: Some(82.0),
        method: PaymentMethod::Cash,
    },
    DemoMember {
        name: "Sana Malik",
        mobile: "+919876543214",
        gender: Gender::Female,
        date_of_birth: "1999-01-30",
        goal: "Improve stamina",
        emergency: "+919797001124",
        height_cm: Some(158.5),
        weight_kg: None,
        method: PaymentMethod::BankTransfer,
    },
    DemoMember {
        name: "Faisal Dar",
        mobile: "+919876543215",
        gender: Gender::Male,
        date_of_birth: "1988-09-14",
        goal: "Strength training",
        emergency: "+919797001125",
        height_cm: Some(181.0),
        weight_kg: Some(90.0),
        method: PaymentMethod::Upi,
    },
];

/// One member per plan, joined over the past month. Offsets are small
/// enough that every membership is still running when seeded.
async fn seed_members(
    db: &DatabaseConnection,
    plans: &[membership_plans::Model],
    now: DateTime<Utc>,
) -> Result<()> {
    let hash = bcrypt::hash("member123", DEFAULT_COST).context("hash member password")?;
    let year = now.year();

    for (idx, demo) in DEMO_MEMBERS.iter().enumerate() {
        let seq = idx as i64 + 1;
        let plan = &plans[idx % plans.len()];
        let start = now - Duration::days(idx as i64 * 6);

        let user = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            full_name: Set(demo.name.to_owned()),
            email: Set(None),
            mobile: Set(demo.mobile.to_owned()),
            password_hash: Set(hash.clone()),
            role: Set(UserRole::Member.as_str().to_owned()),
            status: Set(UserStatus::Active.as_str().to_owned()),
            created_at: Set(start),
            updated_at: Set(start),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert user {}", demo.name))?;

        let member = members::ActiveModel {
            id: Set(Uuid::now_v7()),
            member_code: Set(format_member_code(seq)),
            user_id: Set(user.id),
            gender: Set(demo.gender.as_str().to_owned()),
            date_of_birth: Set(demo
                .date_of_birth
                .parse()
                .with_context(|| format!("date of birth for {}", demo.name))?),
            height_cm: Set(demo.height_cm),
            weight_kg: Set(demo.weight_kg),
            fitness_goal: Set(Some(demo.goal.to_owned())),
            medical_notes: Set(None),
            emergency_contact: Set(Some(demo.emergency.to_owned())),
            join_date: Set(start.date_naive()),
            created_at: Set(start),
            updated_at: Set(start),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert member {}", demo.name))?;

        let membership = memberships::ActiveModel {
            id: Set(Uuid::now_v7()),
            member_id: Set(member.id),
            plan_id: Set(plan.id),
            start_date: Set(start),
            end_date: Set(membership_end_date(start, plan.duration_days)),
            status: Set(MembershipStatus::Active.as_str().to_owned()),
            frozen_days: Set(0),
            last_notification_date: Set(None),
            created_at: Set(start),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert membership for {}", demo.name))?;

        payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            invoice_number: Set(format_invoice_number(year, seq)),
            member_id: Set(member.id),
            membership_id: Set(membership.id),
            amount_paise: Set(plan.final_price_paise),
            gst_amount_paise: Set(0),
            method: Set(demo.method.as_str().to_owned()),
            gateway_order_id: Set(None),
            gateway_payment_id: Set(None),
            status: Set(PaymentStatus::Completed.as_str().to_owned()),
            paid_at: Set(Some(start)),
            created_at: Set(start),
        }
        .insert(db)
        .await
        .with_context(|| format!("insert payment for {}", demo.name))?;

        println!(
            "  {} ({}) on {}",
            demo.name,
            format_member_code(seq),
            plan.name
        );
    }
    Ok(())
}

/// Counters match the rows above, so the next member code is LD-006
/// and the next invoice is 0006.
async fn seed_counters(db: &DatabaseConnection, year: i32) -> Result<()> {
    let rows = [
        ("member-code".to_owned(), DEMO_MEMBERS.len() as i64),
        (format!("invoice-{year}"), DEMO_MEMBERS.len() as i64),
    ];
    for (scope, value) in rows {
        sequence_counters::ActiveModel {
            scope: Set(scope),
            value: Set(value),
        }
        .insert(db)
        .await
        .context("insert sequence counter")?;
    }
    Ok(())
}
