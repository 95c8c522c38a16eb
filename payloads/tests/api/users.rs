use payloads::{Address, Company, User, UserId};

use test_helpers::spawn_app;

#[tokio::test]
async fn list_users_decodes_nested_company_and_city() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users = app.client.list_users().await?;
    let leanne = users
        .iter()
        .find(|u| u.id == UserId(1))
        .expect("fixture user 1");
    assert_eq!(leanne.name, "Leanne Graham");
    assert_eq!(leanne.company.name, "Romaguera-Crona");
    assert_eq!(leanne.address.city, "Gwenborough");

    Ok(())
}

#[tokio::test]
async fn list_users_returns_seeded_users() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let user = User {
        id: UserId(7),
        name: "Kurtis Weissnat".into(),
        email: "Telly.Hoeger@billy.biz".into(),
        phone: "210.067.6132".into(),
        website: "elvis.io".into(),
        company: Company {
            name: "Johns Group".into(),
        },
        address: Address {
            city: "Howemouth".into(),
        },
    };
    app.store().set_users(vec![user.clone()]).await;

    let users = app.client.list_users().await?;
    assert_eq!(users, vec![user]);

    Ok(())
}

#[tokio::test]
async fn extra_fields_from_the_api_are_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with_body(
        "/users",
        r#"[{
            "id": 4,
            "name": "Patricia Lebsack",
            "username": "Karianne",
            "email": "Julianne.OConner@kory.org",
            "phone": "493-170-9623 x156",
            "website": "kale.biz",
            "address": {
                "street": "Hoeger Mall",
                "city": "South Elvis",
                "geo": {"lat": "29.4572"}
            },
            "company": {"name": "Robel-Corkery", "catchPhrase": "Multi-tiered"}
        }]"#,
    )
    .await;

    let users = app.client.list_users().await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].address.city, "South Elvis");

    Ok(())
}
