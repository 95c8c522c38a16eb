//! Sample records in the shape of the public placeholder api.

use payloads::{
    Address, Album, AlbumId, Company, Post, PostId, User, UserId,
};

use crate::store::Dataset;

pub fn dataset() -> Dataset {
    Dataset {
        posts: posts(),
        users: users(),
        albums: albums(),
    }
}

pub fn posts() -> Vec<Post> {
    [
        (
            1,
            1,
            "sunt aut facere repellat provident occaecati",
            "quia et suscipit suscipit recusandae consequuntur expedita et cum",
        ),
        (
            2,
            1,
            "qui est esse",
            "est rerum tempore vitae sequi sint nihil reprehenderit dolor beatae",
        ),
        (
            3,
            1,
            "ea molestias quasi exercitationem repellat qui ipsa sit aut",
            "et iusto sed quo iure voluptatem occaecati omnis eligendi aut ad",
        ),
        (
            4,
            2,
            "eum et est occaecati",
            "ullam et saepe reiciendis voluptatem adipisci sit amet autem",
        ),
        (
            5,
            2,
            "nesciunt quas odio",
            "repudiandae veniam quaerat sunt sed alias aut fugiat sit autem",
        ),
        (
            6,
            3,
            "dolorem eum magni eos aperiam quia",
            "ut aspernatur corporis harum nihil quis provident sequi mollitia",
        ),
    ]
    .into_iter()
    .map(|(id, user_id, title, body)| Post {
        id: PostId(id),
        user_id: UserId(user_id),
        title: title.into(),
        body: body.into(),
    })
    .collect()
}

pub fn users() -> Vec<User> {
    [
        (
            1,
            "Leanne Graham",
            "Sincere@april.biz",
            "1-770-736-8031 x56442",
            "hildegard.org",
            "Romaguera-Crona",
            "Gwenborough",
        ),
        (
            2,
            "Ervin Howell",
            "Shanna@melissa.tv",
            "010-692-6593 x09125",
            "anastasia.net",
            "Deckow-Crist",
            "Wisokyburgh",
        ),
        (
            3,
            "Clementine Bauch",
            "Nathan@yesenia.net",
            "1-463-123-4447",
            "ramiro.info",
            "Romaguera-Jacobson",
            "McKenziehaven",
        ),
    ]
    .into_iter()
    .map(|(id, name, email, phone, website, company, city)| User {
        id: UserId(id),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        website: website.into(),
        company: Company {
            name: company.into(),
        },
        address: Address { city: city.into() },
    })
    .collect()
}

pub fn albums() -> Vec<Album> {
    [
        (1, 1, "quidem molestiae enim"),
        (2, 1, "sunt qui excepturi placeat culpa"),
        (3, 2, "omnis laborum odio"),
        (4, 2, "non esse culpa molestiae omnis sed optio"),
        (5, 3, "eaque aut omnis a"),
    ]
    .into_iter()
    .map(|(id, user_id, title)| Album {
        id: AlbumId(id),
        title: title.into(),
        user_id: UserId(user_id),
    })
    .collect()
}
