use leptos::*;

use folio_boundary::{CommentList, NewComment};

use crate::{api::PublicApi, components::*};

struct Skill {
    name: &'static str,
    description: &'static str,
}

static SKILLS: [Skill; 4] = [
    Skill {
        name: "Rust",
        description: "Reliable services and tooling with a strongly typed language.",
    },
    Skill {
        name: "Web",
        description: "Accessible, responsive interfaces with clean markup.",
    },
    Skill {
        name: "Design",
        description: "Prototypes and interfaces with a focus on the user.",
    },
    Skill {
        name: "Databases",
        description: "Document and relational stores, modeled to fit the data.",
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    demo_url: Option<&'static str>,
}

static PROJECTS: [Project; 2] = [
    Project {
        title: "Personal website",
        description: "This site: a portfolio with visitor feedback and a chatbot.",
        demo_url: None,
    },
    Project {
        title: "UI/UX case study",
        description: "Interface design for a food ordering application.",
        demo_url: Some("https://example.com/food-app"),
    },
];

fn empty_comment_list() -> CommentList {
    CommentList {
        comments: vec![],
        average_rating: 0.0,
    }
}

#[component]
pub fn Home(api: PublicApi) -> impl IntoView {
    // -- signals -- //
    let comments = create_rw_signal(empty_comment_list());
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let rating = create_rw_signal(0u8);
    let hover_rating = create_rw_signal(0u8);
    let (notice, set_notice) = create_signal(None::<String>);
    let (submit_in_progress, set_submit_in_progress) = create_signal(false);

    // -- actions -- //
    let fetch_comments = {
        let api = api.clone();
        create_action(move |(): &()| {
            let api = api.clone();
            async move {
                match api.comments().await {
                    Ok(list) => comments.set(list),
                    Err(err) => {
                        // The page stays usable without comments.
                        log::error!("Unable to fetch comments: {err}");
                        comments.set(empty_comment_list());
                    }
                }
            }
        })
    };

    let submit_comment = {
        let api = api.clone();
        create_action(move |new_comment: &NewComment| {
            let new_comment = new_comment.clone();
            let api = api.clone();
            async move {
                set_submit_in_progress.set(true);
                let result = api.create_comment(&new_comment).await;
                set_submit_in_progress.set(false);
                match result {
                    Ok(()) => {
                        set_notice.update(|n| *n = Some("Comment submitted, thank you!".into()));
                        set_name.update(|v| v.clear());
                        set_email.update(|v| v.clear());
                        set_message.update(|v| v.clear());
                        rating.set(0);
                        // Re-fetch only after the submission succeeded
                        // so the listing reflects it.
                        fetch_comments.dispatch(());
                    }
                    Err(err) => {
                        log::error!("Unable to submit comment: {err}");
                        set_notice.update(|n| {
                            *n = Some("Could not submit your comment. Please try again.".into());
                        });
                    }
                }
            }
        })
    };

    // -- init -- //
    fetch_comments.dispatch(());

    // -- callbacks -- //
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submit_in_progress.get() {
            return;
        }
        let new_comment = NewComment {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            message: message.get().trim().to_string(),
            rating: rating.get(),
        };
        if new_comment.name.is_empty()
            || new_comment.email.is_empty()
            || new_comment.message.is_empty()
            || new_comment.rating == 0
        {
            set_notice.update(|n| *n = Some("All fields and the rating are required!".into()));
            return;
        }
        set_notice.update(|n| *n = None);
        submit_comment.dispatch(new_comment);
    };

    view! {
      <section id="home" class="intro">
        <h1>"Hello, I build things for the web 👋"</h1>
        <p>
          "Passionate about crafting sleek, intuitive and reliable web
           experiences, from the interface down to the service behind it."
        </p>
        <a class="cv-link" href="/cv.pdf" target="_blank">"My CV"</a>
      </section>

      <section id="skills" class="skills">
        <h2>"🛠 My Skills & Tools"</h2>
        <div class="skill-grid">
          {SKILLS.iter().map(|skill| view! {
            <div class="skill-card">
              <h3>{skill.name}</h3>
              <p>{skill.description}</p>
            </div>
          }).collect_view()}
        </div>
      </section>

      <section id="portfolio" class="portfolio">
        <h2>"📁 Portfolio"</h2>
        <div class="project-grid">
          {PROJECTS.iter().map(|project| view! {
            <div class="project-card">
              <h3>{project.title}</h3>
              <p>{project.description}</p>
              {project.demo_url.map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer">"🔗 Live Demo"</a>
              })}
            </div>
          }).collect_view()}
        </div>
      </section>

      <section id="contact" class="contact">
        <h2>"📬 Get in Touch"</h2>
        <form on:submit=on_submit>
          <input
            type="text"
            placeholder="Your Name"
            prop:value=move || name.get()
            on:input=move |ev| set_name.set(event_target_value(&ev))
          />
          <input
            type="email"
            placeholder="Your Email"
            prop:value=move || email.get()
            on:input=move |ev| set_email.set(event_target_value(&ev))
          />
          <textarea
            rows="5"
            placeholder="Your Message"
            prop:value=move || message.get()
            on:input=move |ev| set_message.set(event_target_value(&ev))
          />
          <StarRating rating hover_rating />
          <button type="submit" disabled=move || submit_in_progress.get()>
            "✉️ Send"
          </button>
          {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
        </form>

        <Comments comments />

        <Chatbot api=api.clone() />
      </section>
    }
}
