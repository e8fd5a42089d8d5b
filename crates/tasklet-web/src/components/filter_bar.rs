use tasklet_core::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    Filter,
  pub on_select: Callback<Filter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <div class="panel filter-bar">
          {
              for Filter::ALL.into_iter().map(|filter| {
                  let on_select = props.on_select.clone();
                  let active = props.active == filter;
                  html! {
                      <button
                          class={classes!("filter", active.then_some("active"))}
                          onclick={move |_| on_select.emit(filter)}
                      >
                          { filter.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
