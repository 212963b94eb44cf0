use serde_json::json;
use uuid::Uuid;

use crate::db::Database;

/// Fixed sample dataset written when no data file exists yet
pub fn sample_database() -> serde_json::Result<Database> {
    let users: Vec<_> = [
        "alice", "bob", "charlie", "david", "eve", "frank", "grace", "heidi", "ivan", "judy",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| {
        json!({ "user_id": format!("user-{}", i + 1), "username": name, "password": "pass" })
    })
    .collect();

    let pledge_id = || Uuid::new_v4().to_string();

    serde_json::from_value(json!({
        "users": users,
        "categories": [
            { "category_id": "cat-1", "name": "Technology" },
            { "category_id": "cat-2", "name": "Arts" },
            { "category_id": "cat-3", "name": "Community" },
        ],
        "projects": [
            {
                "project_id": "12345678", "title": "AI-Powered Learning App",
                "target_amount": 50000.0, "deadline": "2025-12-31",
                "current_amount": 25000.0, "category_id": "cat-1", "created_at": "2025-09-01T10:00:00"
            },
            {
                "project_id": "23456789", "title": "Local Art Exhibition",
                "target_amount": 10000.0, "deadline": "2025-11-15",
                "current_amount": 8000.0, "category_id": "cat-2", "created_at": "2025-09-02T11:00:00"
            },
            {
                "project_id": "34567890", "title": "Community Garden",
                "target_amount": 5000.0, "deadline": "2025-10-30",
                "current_amount": 3000.0, "category_id": "cat-3", "created_at": "2025-09-03T12:00:00"
            },
            {
                "project_id": "45678901", "title": "Robotics Club Kits",
                "target_amount": 15000.0, "deadline": "2026-01-20",
                "current_amount": 0.0, "category_id": "cat-1", "created_at": "2025-09-04T13:00:00"
            },
            {
                "project_id": "56789012", "title": "Digital Photography Workshop",
                "target_amount": 7500.0, "deadline": "2025-12-01",
                "current_amount": 7500.0, "category_id": "cat-2", "created_at": "2025-09-05T14:00:00"
            },
            {
                "project_id": "67890123", "title": "Clean Water Initiative",
                "target_amount": 20000.0, "deadline": "2025-12-25",
                "current_amount": 18000.0, "category_id": "cat-3", "created_at": "2025-09-06T15:00:00"
            },
            {
                "project_id": "78901234", "title": "VR Educational Games",
                "target_amount": 30000.0, "deadline": "2026-02-14",
                "current_amount": 10000.0, "category_id": "cat-1", "created_at": "2025-09-07T16:00:00"
            },
            {
                "project_id": "89012345", "title": "Outdoor Mural Project",
                "target_amount": 9000.0, "deadline": "2025-11-20",
                "current_amount": 4500.0, "category_id": "cat-2", "created_at": "2025-09-08T17:00:00"
            },
            {
                "project_id": "90123456", "title": "Youth Leadership Program",
                "target_amount": 12000.0, "deadline": "2025-12-10",
                "current_amount": 1000.0, "category_id": "cat-3", "created_at": "2025-09-09T18:00:00"
            },
        ],
        "reward_tiers": [
            { "reward_id": "r-1", "project_id": "12345678", "title": "Digital Thank You Note", "min_pledge": 10.0, "quota": null },
            { "reward_id": "r-2", "project_id": "12345678", "title": "Early Access & Beta Tester", "min_pledge": 50.0, "quota": 100 },
            { "reward_id": "r-3", "project_id": "23456789", "title": "Mention in Exhibition Booklet", "min_pledge": 25.0, "quota": null },
            { "reward_id": "r-4", "project_id": "23456789", "title": "Signed Poster", "min_pledge": 100.0, "quota": 20 },
            { "reward_id": "r-5", "project_id": "34567890", "title": "Seed Pack", "min_pledge": 15.0, "quota": 50 },
            { "reward_id": "r-6", "project_id": "34567890", "title": "Name a Plant", "min_pledge": 50.0, "quota": 10 },
            { "reward_id": "r-7", "project_id": "45678901", "title": "Thank You Email", "min_pledge": 5.0, "quota": null },
            { "reward_id": "r-8", "project_id": "45678901", "title": "Full Robotics Kit", "min_pledge": 200.0, "quota": 15 },
            { "reward_id": "r-9", "project_id": "56789012", "title": "Free E-Book", "min_pledge": 20.0, "quota": null },
            { "reward_id": "r-10", "project_id": "56789012", "title": "One-on-One Session", "min_pledge": 150.0, "quota": 5 },
            { "reward_id": "r-11", "project_id": "67890123", "title": "Digital Certificate", "min_pledge": 10.0, "quota": null },
            { "reward_id": "r-12", "project_id": "67890123", "title": "Project T-shirt", "min_pledge": 75.0, "quota": 30 },
            { "reward_id": "r-13", "project_id": "78901234", "title": "VR Demo Access", "min_pledge": 30.0, "quota": null },
            { "reward_id": "r-14", "project_id": "78901234", "title": "Your Name in Credits", "min_pledge": 100.0, "quota": 25 },
            { "reward_id": "r-15", "project_id": "89012345", "title": "Digital Wallpaper", "min_pledge": 5.0, "quota": null },
            { "reward_id": "r-16", "project_id": "89012345", "title": "Guided Mural Tour", "min_pledge": 50.0, "quota": 15 },
            { "reward_id": "r-17", "project_id": "90123456", "title": "Sticker Pack", "min_pledge": 15.0, "quota": 100 },
            { "reward_id": "r-18", "project_id": "90123456", "title": "Leadership Guide Book", "min_pledge": 60.0, "quota": 50 },
        ],
        "pledges": [
            { "pledge_id": pledge_id(), "user_id": "user-1", "project_id": "12345678", "timestamp": "2025-09-10T09:00:00", "amount": 50.0, "reward_id": "r-2", "status": "success" },
            { "pledge_id": pledge_id(), "user_id": "user-2", "project_id": "12345678", "timestamp": "2025-09-10T10:00:00", "amount": 100.0, "reward_id": "r-2", "status": "success" },
            { "pledge_id": pledge_id(), "user_id": "user-3", "project_id": "23456789", "timestamp": "2025-09-10T11:00:00", "amount": 10.0, "reward_id": "r-4", "status": "rejected" },
            { "pledge_id": pledge_id(), "user_id": "user-4", "project_id": "23456789", "timestamp": "2025-09-11T12:00:00", "amount": 25.0, "reward_id": "r-3", "status": "success" },
            { "pledge_id": pledge_id(), "user_id": "user-5", "project_id": "34567890", "timestamp": "2025-09-11T13:00:00", "amount": 50.0, "reward_id": "r-6", "status": "success" },
        ],
    }))
}
