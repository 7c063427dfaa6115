use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::auth::LoginDto;
use crate::presentation::handlers::posts::{CreatePostDto, PostDto, UpdatePostDto};
use crate::presentation::handlers::users::{
    ChangePasswordDto, RegisterDto, SearchUsersQuery, UpdateUserDto, UserDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::search_users,
        crate::presentation::handlers::users::show_user,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::users::delete_user,
        crate::presentation::handlers::users::follow_user,
        crate::presentation::handlers::users::unfollow_user,
        crate::presentation::handlers::users::list_followers,
        crate::presentation::handlers::users::list_following,
        crate::presentation::handlers::users::update_password,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::feed,
        crate::presentation::handlers::posts::show_post,
        crate::presentation::handlers::posts::update_post,
        crate::presentation::handlers::posts::delete_post,
        crate::presentation::handlers::posts::posts_by_user,
        crate::presentation::handlers::posts::like_post,
        crate::presentation::handlers::posts::deslike_post
    ),
    components(
        schemas(
            LoginDto,
            RegisterDto,
            UpdateUserDto,
            ChangePasswordDto,
            SearchUsersQuery,
            UserDto,
            CreatePostDto,
            UpdatePostDto,
            PostDto
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User, follow and password endpoints"),
        (name = "posts", description = "Post and like endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
